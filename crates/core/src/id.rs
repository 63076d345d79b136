//! Slug identifiers used as anchors and lookup keys.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A URL-fragment-safe identifier: lowercase ASCII letters, digits and single
/// inner hyphens (`ks-type`, `regular-roman-blind`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::invalid_id("slug must not be empty"));
        }
        if raw.starts_with('-') || raw.ends_with('-') || raw.contains("--") {
            return Err(DomainError::invalid_id(format!(
                "slug has a stray hyphen: {raw:?}"
            )));
        }
        if let Some(c) = raw
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(DomainError::invalid_id(format!(
                "slug {raw:?} contains {c:?}"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_catalog_style_slugs() {
        for raw in ["ks-type", "regular-roman-blind", "japanese", "ds-type2"] {
            let slug: Slug = raw.parse().unwrap();
            assert_eq!(slug.as_str(), raw);
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        for raw in ["", "KS-type", "ks type", "-ks", "ks-", "ks--type", "ks#type"] {
            match Slug::parse(raw) {
                Err(DomainError::InvalidId(_)) => {}
                other => panic!("expected InvalidId for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn serde_is_transparent_and_validating() {
        let slug = Slug::parse("motorized").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"motorized\"");

        let back: Slug = serde_json::from_str("\"motorized\"").unwrap();
        assert_eq!(back, slug);

        assert!(serde_json::from_str::<Slug>("\"Not A Slug\"").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn well_formed_slugs_round_trip(raw in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}") {
                let slug = Slug::parse(raw.clone()).unwrap();
                prop_assert_eq!(slug.to_string(), raw);
            }
        }
    }
}
