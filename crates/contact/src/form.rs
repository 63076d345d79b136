//! Contact form state machine.
//!
//! ```text
//! Idle --Submit (invalid)--> Idle (errors populated)
//! Idle --Submit (valid)----> Submitting --Complete--> Success
//!                                       \--Fail-----> Error
//! Success/Error --Edit-----> Idle
//! ```
//!
//! Delivery is never confirmed: once a compose link has been opened the form
//! reports success.

use serde::{Deserialize, Serialize};

use gajanand_core::{DomainError, StateMachine};

use crate::compose::ComposeLink;
use crate::config::ComposeConfig;
use crate::dispatch::DispatchRoute;
use crate::field::{ContactField, ContactFields};
use crate::validation::{validate, FieldError, ValidationErrors};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Edit { field: ContactField, value: String },
    Submit,
    Complete { route: DispatchRoute },
    Fail { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldEdited { field: ContactField, value: String },
    ValidationFailed { errors: ValidationErrors },
    SubmissionStarted { link: ComposeLink },
    SubmissionCompleted { route: DispatchRoute },
    SubmissionFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    config: ComposeConfig,
    fields: ContactFields,
    errors: ValidationErrors,
    phase: SubmissionPhase,
    pending: Option<ComposeLink>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ComposeConfig::default())
    }
}

impl ContactForm {
    pub fn new(config: ComposeConfig) -> Self {
        Self {
            config,
            fields: ContactFields::default(),
            errors: ValidationErrors::default(),
            phase: SubmissionPhase::Idle,
            pending: None,
        }
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// The submit control is disabled while a link is being dispatched.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Link built by the last successful validation, until the cycle ends.
    pub fn pending_link(&self) -> Option<&ComposeLink> {
        self.pending.as_ref()
    }

    fn handle_submit(&self) -> Result<Vec<FormEvent>, DomainError> {
        if self.is_submitting() {
            return Err(DomainError::conflict("submission already in progress"));
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            return Ok(vec![FormEvent::ValidationFailed { errors }]);
        }

        let link = ComposeLink::build(&self.fields, &self.config);
        Ok(vec![FormEvent::SubmissionStarted { link }])
    }

    fn ensure_submitting(&self, action: &str) -> Result<(), DomainError> {
        if !self.is_submitting() {
            return Err(DomainError::conflict(format!(
                "cannot {action} from {:?}",
                self.phase
            )));
        }
        Ok(())
    }
}

impl StateMachine for ContactForm {
    type Command = FormCommand;
    type Event = FormEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            FormEvent::FieldEdited { field, value } => {
                self.fields.set(*field, value.clone());
                self.errors.remove(*field);
                if matches!(self.phase, SubmissionPhase::Success | SubmissionPhase::Error) {
                    self.phase = SubmissionPhase::Idle;
                }
            }
            FormEvent::ValidationFailed { errors } => {
                self.errors = errors.clone();
                self.phase = SubmissionPhase::Idle;
            }
            FormEvent::SubmissionStarted { link } => {
                self.errors.clear();
                self.pending = Some(link.clone());
                self.phase = SubmissionPhase::Submitting;
            }
            FormEvent::SubmissionCompleted { .. } => {
                self.fields = ContactFields::default();
                self.errors.clear();
                self.pending = None;
                self.phase = SubmissionPhase::Success;
            }
            FormEvent::SubmissionFailed { .. } => {
                self.pending = None;
                self.phase = SubmissionPhase::Error;
            }
        }
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            FormCommand::Edit { field, value } => Ok(vec![FormEvent::FieldEdited {
                field: *field,
                value: value.clone(),
            }]),
            FormCommand::Submit => self.handle_submit(),
            FormCommand::Complete { route } => {
                self.ensure_submitting("complete")?;
                Ok(vec![FormEvent::SubmissionCompleted { route: *route }])
            }
            FormCommand::Fail { reason } => {
                self.ensure_submitting("fail")?;
                Ok(vec![FormEvent::SubmissionFailed {
                    reason: reason.clone(),
                }])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(form: &mut ContactForm, field: ContactField, value: &str) {
        form.execute(&FormCommand::Edit {
            field,
            value: value.to_string(),
        })
        .unwrap();
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        edit(&mut form, ContactField::Name, "Jane Doe");
        edit(&mut form, ContactField::Email, "jane@example.com");
        edit(&mut form, ContactField::Phone, "9825048955");
        edit(&mut form, ContactField::Message, "Need a quote for ripplefold tracks.");
        form
    }

    #[test]
    fn starts_idle_and_empty() {
        let form = ContactForm::default();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(form.fields().is_blank());
        assert!(form.errors().is_empty());
        assert!(form.pending_link().is_none());
    }

    #[test]
    fn invalid_submit_stays_idle_with_errors() {
        let mut form = ContactForm::default();
        let events = form.execute(&FormCommand::Submit).unwrap();
        assert!(matches!(events[..], [FormEvent::ValidationFailed { .. }]));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn edit_clears_only_its_own_error() {
        let mut form = ContactForm::default();
        form.execute(&FormCommand::Submit).unwrap();

        edit(&mut form, ContactField::Email, "x");
        assert_eq!(form.error(ContactField::Email), None);
        assert_eq!(form.error(ContactField::Name), Some(FieldError::NameRequired));
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn valid_submit_moves_to_submitting() {
        let mut form = filled();
        form.execute(&FormCommand::Submit).unwrap();
        assert!(form.is_submitting());
        assert_eq!(
            form.pending_link().unwrap().subject(),
            "Contact Form Inquiry from Jane Doe"
        );
        // fields survive until completion
        assert_eq!(form.value(ContactField::Name), "Jane Doe");
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut form = filled();
        form.execute(&FormCommand::Submit).unwrap();
        let err = form.execute(&FormCommand::Submit).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict for double submit"),
        }
        assert!(form.is_submitting());
    }

    #[test]
    fn complete_clears_fields_and_reports_success() {
        let mut form = filled();
        form.execute(&FormCommand::Submit).unwrap();
        form.execute(&FormCommand::Complete {
            route: DispatchRoute::Primary,
        })
        .unwrap();

        assert_eq!(form.phase(), SubmissionPhase::Success);
        assert!(form.fields().is_blank());
        assert!(form.errors().is_empty());
        assert!(form.pending_link().is_none());
    }

    #[test]
    fn complete_outside_submitting_is_rejected() {
        let mut form = ContactForm::default();
        let err = form
            .execute(&FormCommand::Complete {
                route: DispatchRoute::Fallback,
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn fail_keeps_fields_and_edit_returns_to_idle() {
        let mut form = filled();
        form.execute(&FormCommand::Submit).unwrap();
        form.execute(&FormCommand::Fail {
            reason: "popup blocked".to_string(),
        })
        .unwrap();
        assert_eq!(form.phase(), SubmissionPhase::Error);
        assert_eq!(form.value(ContactField::Name), "Jane Doe");

        edit(&mut form, ContactField::Message, "Need a quote for ripplefold tracks!");
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn edit_after_success_starts_fresh_cycle() {
        let mut form = filled();
        form.execute(&FormCommand::Submit).unwrap();
        form.execute(&FormCommand::Complete {
            route: DispatchRoute::Primary,
        })
        .unwrap();

        edit(&mut form, ContactField::Name, "J");
        assert_eq!(form.phase(), SubmissionPhase::Idle);

        form.execute(&FormCommand::Submit).unwrap();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let form = filled();
        let before = form.clone();
        let _ = form.handle(&FormCommand::Submit).unwrap();
        let _ = form
            .handle(&FormCommand::Edit {
                field: ContactField::Name,
                value: "Other".to_string(),
            })
            .unwrap();
        assert_eq!(form, before);
    }

    #[test]
    fn phase_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SubmissionPhase::Submitting).unwrap(),
            "\"submitting\""
        );
    }
}
