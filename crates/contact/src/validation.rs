//! Per-field rules and the validation pass.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::field::{ContactField, ContactFields, FIELDS};

/// Minimum trimmed message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Required digit count once separators are stripped from a phone number.
pub const PHONE_DIGITS: usize = 10;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    // local@domain.tld, no whitespace, exactly one @ per side
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// A user-correctable problem with one field. `Display` is the inline message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid 10-digit phone number")]
    PhoneInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub(crate) fn check_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

pub(crate) fn check_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL.is_match(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub(crate) fn check_phone(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits != PHONE_DIGITS {
        return Err(FieldError::PhoneInvalid);
    }
    Ok(())
}

pub(crate) fn check_message(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::MessageRequired);
    }
    if trimmed.chars().count() < MIN_MESSAGE_CHARS {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

/// Outcome of one validation pass; empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<ContactField, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn remove(&mut self, field: ContactField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Errors in field-table order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

impl FromIterator<(ContactField, FieldError)> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = (ContactField, FieldError)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Run every rule in [`FIELDS`] against `fields`.
///
/// Always evaluates all fields; never stops at the first failure.
pub fn validate(fields: &ContactFields) -> ValidationErrors {
    FIELDS
        .iter()
        .filter_map(|spec| {
            (spec.rule)(fields.get(spec.field))
                .err()
                .map(|err| (spec.field, err))
        })
        .collect()
}
