//! Published contact details shown on the Contact page and in the footer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    /// Display numbers; the first one is the dial target.
    pub phones: &'static [&'static str],
    /// Postal addresses, one line per entry.
    pub addresses: &'static [&'static [&'static str]],
    pub region: &'static str,
}

impl ContactDetails {
    pub const STANDARD: ContactDetails = ContactDetails {
        email: "anita.mrugesh@gmail.com",
        phones: &["9825048955", "9925048955"],
        addresses: &[
            &[
                "B-701, Ocean Colina Flats, Nr. Vardan Tower,",
                "B/h. Anjan Greens, Prahladnagar,",
                "Ahmedabad-380013",
            ],
            &["B-101 Sector-5, Nirmanagar,", "Ahmedabad-382481"],
        ],
        region: "Ahmedabad, Gujarat, India",
    };

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> Option<String> {
        self.phones.first().map(|p| format!("tel:{p}"))
    }

    /// `9825048955 / 9925048955`
    pub fn phones_display(&self) -> String {
        self.phones.join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs() {
        let d = ContactDetails::STANDARD;
        assert_eq!(d.mailto_href(), "mailto:anita.mrugesh@gmail.com");
        assert_eq!(d.tel_href().as_deref(), Some("tel:9825048955"));
        assert_eq!(d.phones_display(), "9825048955 / 9925048955");
    }

    #[test]
    fn published_email_matches_default_recipient() {
        let config = crate::ComposeConfig::default();
        assert_eq!(ContactDetails::STANDARD.email, config.recipient);
    }
}
