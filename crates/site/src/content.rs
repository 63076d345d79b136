//! Static page copy.

/// A home-page category tile linking into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub description: &'static str,
    /// Product id the tile scrolls to on the Products page.
    pub anchor: &'static str,
}

/// Title + one-line description card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub title: &'static str,
    pub icon: &'static str,
}

pub mod home {
    use super::Category;

    pub const TAGLINE: &str = "Quality is Priority";
    pub const HERO: &str = "Leading importer of premium curtain track system components, \
        delivering excellence and reliability to the architectural industry.";
    pub const WELCOME_TITLE: &str = "Welcome to Gajanand Enterprise";
    pub const WELCOME: &str = "We specialize in importing high-quality curtain track system \
        components for the architectural and interior design industry. Our commitment to \
        excellence ensures that every product meets the highest standards of quality and \
        reliability.";
    pub const CATEGORIES_TITLE: &str = "Our Product Categories";
    pub const CATEGORIES_SUBTITLE: &str = "Premium solutions for every need";
    pub const CTA_TITLE: &str = "Ready to Get Started?";
    pub const CTA: &str = "Contact us today to learn more about our products and how we can \
        help with your curtain track system needs.";

    pub const CATEGORIES: [Category; 5] = [
        Category {
            name: "Roman Blind Track Components",
            description: "Premium components for elegant Roman blind systems",
            anchor: "regular-roman-blind",
        },
        Category {
            name: "Ripplefold Curtain Track Systems",
            description: "Smooth and sophisticated ripplefold solutions",
            anchor: "ks-type",
        },
        Category {
            name: "Motorized Curtain Track Systems",
            description: "Modern automated curtain systems for convenience",
            anchor: "motorized",
        },
        Category {
            name: "Japanese Curtain Track Systems",
            description: "Traditional Japanese design with modern functionality",
            anchor: "japanese",
        },
        Category {
            name: "Bendable & Geometric Tracks",
            description: "Custom curved and geometric track solutions",
            anchor: "bendable",
        },
    ];
}

pub mod products {
    pub const TITLE: &str = "Curtain Track & Blind Systems";
    pub const INTRO: &str = "Gajanand Enterprise supplies high-quality curtain track and blind \
        system components, engineered for smooth operation, durability, and architectural \
        flexibility. Our imported aluminium track systems are suitable for residential, \
        commercial, and hospitality projects.";
    pub const STOCK_LENGTHS: &str = "All systems are available in custom cut sizes, with \
        standard stock lengths up to 5.8 meters (≈19 feet).";
}

pub mod about {
    use super::{Badge, Highlight};

    pub const TITLE: &str = "About Gajanand Enterprise";
    pub const JOURNEY: [&str; 2] = [
        "Gajanand Enterprise has been active in the curtain track systems and window component \
         industry since 2000, developing strong technical expertise and in-depth market \
         knowledge. Since 2011, we have specialised in the import and supply of \
         precision-engineered curtain track systems and related components, known for \
         consistent quality and reliable performance.",
        "We cater to the requirements of interior professionals, installers, and project-based \
         applications across residential and commercial spaces.",
    ];
    pub const SPECIALIZATION: [&str; 2] = [
        "We specialize in importing aluminium curtain tracks, blind systems, motorized tracks, \
         and architectural track solutions, offering consistent quality and customized \
         cut-size services.",
        "Our product range is designed to support straight, curved, and geometric \
         installations with smooth and durable operation.",
    ];
    pub const REPUTATION: &str = "Over the years, Gajanand Enterprise has built a reputation as \
        a dependable component supplier, emphasizing:";

    pub const PRODUCT_RANGE: [Highlight; 4] = [
        Highlight {
            title: "Aluminium Curtain Tracks",
            description: "High-quality imported aluminium track systems for smooth and durable operation",
        },
        Highlight {
            title: "Blind Systems",
            description: "Comprehensive blind system solutions for various interior applications",
        },
        Highlight {
            title: "Motorized Tracks",
            description: "Automated curtain track systems for modern smart homes and commercial spaces",
        },
        Highlight {
            title: "Architectural Track Solutions",
            description: "Custom solutions for straight, curved, and geometric installations",
        },
    ];

    pub const VALUES: [Badge; 3] = [
        Badge { title: "Technical Suitability", icon: "⚙️" },
        Badge { title: "Long-term Performance", icon: "⏱️" },
        Badge { title: "Efficient Supply Support", icon: "📦" },
    ];

    pub const SERVICES: [Highlight; 2] = [
        Highlight {
            title: "Custom Cut-Size Services",
            description: "All systems are available in custom cut sizes, with standard stock \
                lengths up to 5.8 meters (≈19 feet).",
        },
        Highlight {
            title: "Installation Support",
            description: "We support straight, curved, and geometric installations with \
                technical guidance and reliable components.",
        },
    ];
}

pub mod contact {
    pub const TITLE: &str = "Contact Us";
    pub const SUBTITLE: &str = "Get in touch with us for inquiries about our products and services";
    pub const CHANNELS_TITLE: &str = "Get in Touch";
    pub const CHANNELS: &str = "We'd love to hear from you. Reach out to us through any of the \
        following channels.";
    pub const FORM_TITLE: &str = "Send us a Message";
    pub const SUCCESS: &str = "Thank you! Your message is ready in your email app.";
    pub const ERROR: &str = "There was an error. Please try again or contact us directly.";
    pub const SUBMIT: &str = "Send Message";
    pub const SUBMITTING: &str = "Sending...";
}

pub mod footer {
    pub const BLURB: &str = "Specializing in premium curtain track system components";
}
