//! Built-in product table.

use gajanand_core::DomainResult;

use crate::product::Product;

const ROMAN_APPLICATIONS: [&str; 3] = [
    "Residential interiors",
    "Hospitality projects",
    "Offices and boutique spaces",
];

const ROMAN_OPERATION: [&str; 2] = ["Chain operation", "Cord operation"];

const TRACK_OPERATION: [&str; 2] = ["Simple Row Runner", "Ripplefold Carrier System"];

pub(crate) fn products() -> DomainResult<Vec<Product>> {
    Ok(vec![
        Product::builder("regular-roman-blind")
            .title("Regular Roman Blind Systems")
            .description(
                "Regular Roman blind systems are designed to deliver structured folds and \
                 controlled fabric movement. The track profiles ensure smooth lifting and stable \
                 operation, making them ideal for elegant interior spaces.",
            )
            .applications(ROMAN_APPLICATIONS)
            .features([
                "Smooth and balanced operation",
                "High-grade aluminium profile",
                "Clean and minimal design",
                "Traditional drum mechanism",
            ])
            .operation_options(ROMAN_OPERATION)
            .images([
                "/Roman Blinds/Regular Roman Blinds/Regular Section.jpg",
                "/Roman Blinds/Regular Roman Blinds/Regular Section (2).jpg",
                "/Roman Blinds/Regular Roman Blinds/Regular Section (3).jpg",
                "/Roman Blinds/Regular Roman Blinds/Mechanism Set.jpg",
                "/Roman Blinds/Regular Roman Blinds/Drum.jpg",
                "/Roman Blinds/Regular Roman Blinds/Chain.jpg",
                "/Roman Blinds/Regular Roman Blinds/Hex Rod 7MM.jpg",
                "/Roman Blinds/Regular Roman Blinds/White Coated Bracket.jpg",
            ])
            .build()?,
        Product::builder("tubeless-roman-blind")
            .title("Tubeless Roman Blind Systems")
            .description(
                "Tubeless Roman blind systems offer a modern alternative with a streamlined \
                 design. These systems provide the same elegant structured folds without the \
                 traditional drum mechanism, offering a cleaner aesthetic.",
            )
            .applications(
                ROMAN_APPLICATIONS
                    .into_iter()
                    .chain(["Modern minimalist designs"]),
            )
            .features([
                "Smooth and balanced operation",
                "High-grade aluminium profile",
                "Clean and minimal design",
                "Device and cone mechanism",
            ])
            .operation_options(ROMAN_OPERATION)
            .images([
                "/Roman Blinds/Tubeless Roman Blinds/Tubeless Section.jpg",
                "/Roman Blinds/Tubeless Roman Blinds/Tubeless Section (2).jpg",
                "/Roman Blinds/Tubeless Roman Blinds/Tubeless Section (3).jpg",
                "/Roman Blinds/Tubeless Roman Blinds/Tubeless Section (4).jpg",
                "/Roman Blinds/Tubeless Roman Blinds/Mechanism Set.jpg",
                "/Roman Blinds/Tubeless Roman Blinds/Device + Cone.jpg",
                "/Roman Blinds/Tubeless Roman Blinds/Device + Cone (2).jpg",
                "/Roman Blinds/Tubeless Roman Blinds/Square Rod 5mm .jpg",
            ])
            .build()?,
        Product::builder("ks-type")
            .title("KS Type Curtain Tracks")
            .description(
                "KS Type tracks are compact and efficient, designed for standard straight \
                 curtain installations. They provide reliable sliding performance and are ideal \
                 for everyday curtain applications.",
            )
            .applications([
                "Residential Interiors",
                "Large windows",
                "Heavy fabric curtains",
                "Offices and light commercial spaces",
            ])
            .features(["Slim aluminium profile", "Smooth runner movement"])
            .operation_options(TRACK_OPERATION)
            .images([
                "/Curtain Tracks/Curtain Tracks- KS/KS-Simple/KS Simple Assembled.jpeg",
                "/Curtain Tracks/Curtain Tracks- KS/KS - Ripple/KS Ripple Assembled.jpeg",
                "/Curtain Tracks/Curtain Tracks- KS/KS - Ripple/KS Mindi Runner/KS MindiAssembled.jpeg",
                "/Curtain Tracks/Curtain Tracks- KS/KS-Simple/KS Track.jpg",
                "/Curtain Tracks/Curtain Tracks- KS/KS-Simple/KS Track (2).jpg",
                "/Curtain Tracks/Curtain Tracks- KS/KS-Simple/KS Track (3).jpg",
                "/Curtain Tracks/Curtain Tracks- KS/KS - Ripple/KS Track.jpg",
                "/Curtain Tracks/Curtain Tracks- KS/KS - Ripple/KS Track (2).jpg",
            ])
            .build()?,
        Product::builder("ds-type")
            .title("DS Type Curtain Tracks")
            .description(
                "DS Type tracks are designed for enhanced strength and stability. With a \
                 reinforced profile, these tracks are suitable for heavier curtains and wider \
                 spans while maintaining smooth operation.",
            )
            .applications([
                "Large windows",
                "Residential Interiors",
                "Hotels and commercial interiors",
                "Heavy fabric curtains",
            ])
            .features(["Slim aluminium profile", "Smooth and silent movement"])
            .operation_options(TRACK_OPERATION)
            .images([
                "/Curtain Tracks/Curtain Tracks- DS/DS Simple/DS Simple Assembled.jpeg",
                "/Curtain Tracks/Curtain Tracks- DS/DS Simple/DS Simple Assembled (2).jpeg",
                "/Curtain Tracks/Curtain Tracks- DS/DS - Ripple/DS Ripple Assembled.jpeg",
                "/Curtain Tracks/Curtain Tracks- DS/DS - Ripple/DS Assembled Ripple.jpeg",
                "/Curtain Tracks/Curtain Tracks- DS/DS - Ripple/DS Mindi Runner/DS Mindi Assembled.jpeg",
                "/Curtain Tracks/Curtain Tracks- DS/DS Simple/DS Track.jpg",
                "/Curtain Tracks/Curtain Tracks- DS/DS Simple/DS Track (2).jpg",
                "/Curtain Tracks/Curtain Tracks- DS/DS - Ripple/DS Track.jpg",
            ])
            .build()?,
        Product::builder("japanese")
            .title("Japanese Curtain Track Systems")
            .description(
                "Japanese curtain track systems are specially designed to offer a modern and \
                 minimal aesthetic while ensuring precise alignment and smooth movement.",
            )
            .applications([
                "Large glass façades",
                "Room partitions",
                "Modern residential and commercial interiors",
            ])
            .features(["Clean and contemporary look", "Smooth operation"])
            .operation_options(TRACK_OPERATION)
            .images([
                "/Curtain Tracks/Curtain Tracks- Japanese Track/Japanese Simple/Japanese Track White.jpg",
                "/Curtain Tracks/Curtain Tracks- Japanese Track/Japanese Simple/Japanese Track White (2).jpg",
                "/Curtain Tracks/Curtain Tracks- Japanese Track/Japanese Simple/Japanese Track Brown.jpg",
                "/Curtain Tracks/Curtain Tracks- Japanese Track/Japanese Simple/Japanese Track Wooden.jpg",
                "/Curtain Tracks/Curtain Tracks- Japanese Track/Japanese Ripple/Japanese Track White.jpg",
                "/Curtain Tracks/Curtain Tracks- Japanese Track/Japanese Ripple/Japanese Track White (2).jpg",
                "/Curtain Tracks/Curtain Tracks- Japanese Track/Japanese Ripple/Japanese Track Brown.jpg",
                "/Curtain Tracks/Curtain Tracks- Japanese Track/Japanese Ripple/Japanese Track Wooden.jpg",
            ])
            .build()?,
        Product::builder("motorized")
            .title("Motorized Curtain Tracks")
            .description(
                "Motorized curtain tracks provide effortless operation through automated \
                 control systems. These tracks are ideal for smart homes, luxury interiors, and \
                 commercial environments where convenience and precision are essential.",
            )
            .applications([
                "Smart homes",
                "Hotels and conference rooms",
                "Premium residential projects",
            ])
            .features([
                "Smooth and silent motor operation",
                "Supports long and heavy curtains",
                "Compatible with automation systems",
                "Reliable performance for daily use",
            ])
            .images([
                "/Motors/AoK - AM 68 3 wire Tuya technology/AOK MOTOR AM68 3 Wire .jpeg",
                "/Motors/AoK - AM 68 3 wire Tuya technology/AOK MOTOR AM68 3 Wire.jpeg",
                "/Motors/AoK - AM 68 3 wire Tuya technology/AOK MOTOR AM68 3 Wire(2).jpeg",
                "/Motors/AoK AM 68 5 wire WiFi Technology/AM 68 5 Wire AOK.jpeg",
                "/Motors/AoK AM 68 5 wire WiFi Technology/AM 68 5 Wire AOK (2).jpeg",
                "/Motors/AoK AM 68 5 wire WiFi Technology/AM 68 5 Wire AOK (3).jpeg",
                "/Motors/Novo Motors/NOVO Motors (2).jpeg",
                "/Motors/Novo Motors/NOVO Motors (3).jpeg",
            ])
            .build()?,
        Product::builder("bendable")
            .title("Bendable & Geometric Curtain Tracks (Up to 360°)")
            .description(
                "Bendable curtain track systems are engineered to follow custom architectural \
                 layouts. These tracks can be shaped into precise curves and geometric angles, \
                 including continuous bends up to 360°, without affecting curtain movement.",
            )
            .applications([
                "Bay windows",
                "Curved walls",
                "Circular and architectural layouts",
            ])
            .features([
                "Supports complex curves and angles",
                "Bendable up to 360°",
                "Smooth operation on curved paths",
                "Available for manual and motorized systems",
            ])
            .bending_available([
                "Motorized Curtain Tracks",
                "KS Curtain Tracks",
                "Japanese Curtain Tracks",
            ])
            .track_length_notes([
                "Supplied in standard lengths up to 5.8 meters (≈19 feet)",
                "Cut-to-size service available",
            ])
            .images(["/bending-track-1.jpeg", "/bending-track-2.jpeg"])
            .build()?,
    ])
}
