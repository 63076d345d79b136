//! Compose-link construction.

use serde::Serialize;

use gajanand_core::ValueObject;

use crate::config::ComposeConfig;
use crate::field::ContactFields;

/// A pre-filled message, as a webmail URL plus a `mailto:` fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposeLink {
    subject: String,
    body: String,
    primary: String,
    fallback: String,
}

impl ComposeLink {
    /// Build both targets from the raw field values. Deterministic: the same
    /// fields and config always yield the same link.
    pub fn build(fields: &ContactFields, config: &ComposeConfig) -> Self {
        let subject = format!("Contact Form Inquiry from {}", fields.name);
        let body = format!(
            "Hello,\n\n\
             You have received a new contact form submission:\n\n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\n\
             Message:\n{}\n\n\
             ---\n\
             This message was sent from the {} website contact form.",
            fields.name, fields.email, fields.phone, fields.message, config.site_name,
        );

        let su = urlencoding::encode(&subject);
        let encoded_body = urlencoding::encode(&body);
        let recipient = &config.recipient;

        let primary = format!(
            "{}?view=cm&fs=1&to={recipient}&su={su}&body={encoded_body}",
            config.compose_base
        );
        let fallback = format!("mailto:{recipient}?subject={su}&body={encoded_body}");

        Self {
            subject,
            body,
            primary,
            fallback,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Webmail compose URL, opened in a new browsing context.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// `mailto:` URL for the default mail handler.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl ValueObject for ComposeLink {}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "98 250 48955".to_string(),
            message: "Interested in your motorized tracks.".to_string(),
        }
    }

    #[test]
    fn subject_and_body_layout() {
        let link = ComposeLink::build(&fields(), &ComposeConfig::default());
        assert_eq!(link.subject(), "Contact Form Inquiry from Jane Doe");
        assert_eq!(
            link.body(),
            "Hello,\n\nYou have received a new contact form submission:\n\n\
             Name: Jane Doe\nEmail: jane@example.com\nPhone: 98 250 48955\n\n\
             Message:\nInterested in your motorized tracks.\n\n---\n\
             This message was sent from the Gajanand Enterprise website contact form."
        );
    }

    #[test]
    fn primary_and_fallback_share_parameters() {
        let link = ComposeLink::build(&fields(), &ComposeConfig::default());
        let su = "Contact%20Form%20Inquiry%20from%20Jane%20Doe";

        assert!(link.primary().starts_with(
            "https://mail.google.com/mail/?view=cm&fs=1&to=anita.mrugesh@gmail.com&su="
        ));
        assert!(link.primary().contains(&format!("&su={su}&body=Hello%2C%0A%0A")));
        assert!(link.fallback().starts_with(&format!(
            "mailto:anita.mrugesh@gmail.com?subject={su}&body=Hello%2C%0A%0A"
        )));

        let primary_body = link.primary().split("&body=").nth(1).unwrap();
        let fallback_body = link.fallback().split("&body=").nth(1).unwrap();
        assert_eq!(primary_body, fallback_body);
        assert_eq!(
            urlencoding::decode(primary_body).unwrap(),
            link.body()
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let mut f = fields();
        f.name = "A&B=C?".to_string();
        f.message = "Price: 100% #1 & more".to_string();
        let link = ComposeLink::build(&f, &ComposeConfig::default());

        assert!(link.fallback().contains("subject=Contact%20Form%20Inquiry%20from%20A%26B%3DC%3F&"));
        // only the query separators survive unescaped
        assert_eq!(link.primary().matches('&').count(), 4);
        assert!(!link.primary().contains('#'));
    }

    #[test]
    fn config_drives_recipient_and_signature() {
        let config = ComposeConfig {
            recipient: "sales@example.com".to_string(),
            site_name: "Example Tracks".to_string(),
            ..ComposeConfig::default()
        };
        let link = ComposeLink::build(&fields(), &config);
        assert!(link.fallback().starts_with("mailto:sales@example.com?"));
        assert!(link.primary().contains("&to=sales@example.com&"));
        assert!(link.body().ends_with("from the Example Tracks website contact form."));
    }
}
