//! Contact form: validation, compose-link construction and submission flow.
//!
//! Nothing here sends email. A successful submission produces a pair of
//! compose links (webmail first, `mailto:` as fallback) and the shell opens
//! one of them through a [`ComposeDispatcher`].

pub mod compose;
pub mod config;
pub mod dispatch;
pub mod field;
pub mod form;
pub mod info;
pub mod validation;

pub use compose::ComposeLink;
pub use config::ComposeConfig;
pub use dispatch::{dispatch, submit_now, ComposeDispatcher, DispatchError, DispatchRoute};
pub use field::{ContactField, ContactFields, FieldKind, FieldSpec, FIELDS};
pub use form::{ContactForm, FormCommand, FormEvent, SubmissionPhase};
pub use info::ContactDetails;
pub use validation::{validate, FieldError, ValidationErrors};
