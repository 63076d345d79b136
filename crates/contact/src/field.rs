//! Declarative field table.
//!
//! The form is rendered by iterating [`FIELDS`]; each row carries its own
//! validation rule, so adding a field is one enum variant plus one row.

use serde::{Deserialize, Serialize};

use crate::validation::{self, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// HTML `id`/`name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }

    pub fn spec(&self) -> &'static FieldSpec {
        // Table order matches enum order.
        &FIELDS[*self as usize]
    }
}

impl core::fmt::Display for ContactField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the shell renders the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea { rows: u32 },
}

impl FieldKind {
    /// `type` attribute for `<input>`; `None` for a textarea.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Tel => Some("tel"),
            FieldKind::TextArea { .. } => None,
        }
    }
}

pub struct FieldSpec {
    pub field: ContactField,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub rule: fn(&str) -> Result<(), FieldError>,
}

impl core::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

pub static FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        field: ContactField::Name,
        label: "Name",
        kind: FieldKind::Text,
        placeholder: "Your Name",
        rule: validation::check_name,
    },
    FieldSpec {
        field: ContactField::Email,
        label: "Email",
        kind: FieldKind::Email,
        placeholder: "your.email@example.com",
        rule: validation::check_email,
    },
    FieldSpec {
        field: ContactField::Phone,
        label: "Phone",
        kind: FieldKind::Tel,
        placeholder: "10-digit phone number",
        rule: validation::check_phone,
    },
    FieldSpec {
        field: ContactField::Message,
        label: "Message",
        kind: FieldKind::TextArea { rows: 6 },
        placeholder: "Your message...",
        rule: validation::check_message,
    },
];

/// Raw, unvalidated form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        FIELDS.iter().all(|spec| self.get(spec.field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_line_up_with_enum() {
        for (i, spec) in FIELDS.iter().enumerate() {
            assert_eq!(spec.field as usize, i);
            assert_eq!(spec.field.spec().label, spec.label);
        }
    }

    #[test]
    fn only_message_is_a_textarea() {
        let textareas: Vec<_> = FIELDS
            .iter()
            .filter(|s| s.kind.input_type().is_none())
            .map(|s| s.field)
            .collect();
        assert_eq!(textareas, [ContactField::Message]);
        assert_eq!(ContactField::Phone.spec().kind.input_type(), Some("tel"));
    }

    #[test]
    fn set_then_get() {
        let mut fields = ContactFields::default();
        assert!(fields.is_blank());
        fields.set(ContactField::Phone, "98 250 48955");
        assert_eq!(fields.get(ContactField::Phone), "98 250 48955");
        assert!(!fields.is_blank());
    }

    #[test]
    fn field_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContactField::Message).unwrap(),
            "\"message\""
        );
    }
}
