//! Handing a compose link to the browser.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use gajanand_core::{DomainResult, StateMachine};

use crate::compose::ComposeLink;
use crate::config::ComposeConfig;
use crate::form::{ContactForm, FormCommand, SubmissionPhase};

/// Browser navigation primitives the shell provides.
pub trait ComposeDispatcher {
    /// Open `url` in a new tab/window.
    fn open_new_context(&self, url: &str) -> Result<(), DispatchError>;

    /// Navigate the current tab to `url`.
    fn navigate_current(&self, url: &str) -> Result<(), DispatchError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("could not open a new window: {0}")]
    OpenFailed(String),
    #[error("could not navigate: {0}")]
    NavigationFailed(String),
}

/// Which of the two compose targets was handed to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchRoute {
    /// Webmail compose page in a new browsing context.
    Primary,
    /// `mailto:` in the current browsing context.
    Fallback,
}

impl DispatchRoute {
    /// How long the "Sending..." state stays visible before success is shown.
    pub fn settle_delay(&self, config: &ComposeConfig) -> Duration {
        match self {
            DispatchRoute::Primary => config.primary_delay(),
            DispatchRoute::Fallback => config.fallback_delay(),
        }
    }
}

/// Open the webmail link; if that fails, navigate to the `mailto:` link.
///
/// Returns the fallback's error only when both routes fail.
pub fn dispatch<D>(link: &ComposeLink, dispatcher: &D) -> Result<DispatchRoute, DispatchError>
where
    D: ComposeDispatcher + ?Sized,
{
    match dispatcher.open_new_context(link.primary()) {
        Ok(()) => Ok(DispatchRoute::Primary),
        Err(err) => {
            tracing::warn!(error = %err, "webmail compose failed; falling back to mailto");
            dispatcher.navigate_current(link.fallback())?;
            Ok(DispatchRoute::Fallback)
        }
    }
}

/// Run a whole submit cycle synchronously: validate, dispatch, then complete
/// (or fail) without waiting for the display delay.
///
/// Returns the phase the form ends in. Invalid input leaves the form `Idle`
/// with its errors populated and nothing dispatched.
pub fn submit_now<D>(form: &mut ContactForm, dispatcher: &D) -> DomainResult<SubmissionPhase>
where
    D: ComposeDispatcher + ?Sized,
{
    form.execute(&FormCommand::Submit)?;

    let Some(link) = form.pending_link().cloned() else {
        tracing::debug!(errors = form.errors().len(), "contact form rejected by validation");
        return Ok(form.phase());
    };

    match dispatch(&link, dispatcher) {
        Ok(route) => {
            tracing::info!(?route, "contact inquiry handed to mail client");
            form.execute(&FormCommand::Complete { route })?;
        }
        Err(err) => {
            tracing::error!(error = %err, "no compose route could be opened");
            form.execute(&FormCommand::Fail {
                reason: err.to_string(),
            })?;
        }
    }
    Ok(form.phase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::field::ContactField;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
        navigated: RefCell<Vec<String>>,
        block_open: bool,
        block_navigate: bool,
    }

    impl ComposeDispatcher for Recorder {
        fn open_new_context(&self, url: &str) -> Result<(), DispatchError> {
            if self.block_open {
                return Err(DispatchError::OpenFailed("popup blocked".to_string()));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn navigate_current(&self, url: &str) -> Result<(), DispatchError> {
            if self.block_navigate {
                return Err(DispatchError::NavigationFailed("no window".to_string()));
            }
            self.navigated.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        for (field, value) in [
            (ContactField::Name, "Ravi"),
            (ContactField::Email, "ravi@example.in"),
            (ContactField::Phone, "99250 48955"),
            (ContactField::Message, "Please share the motor catalogue."),
        ] {
            form.execute(&FormCommand::Edit {
                field,
                value: value.to_string(),
            })
            .unwrap();
        }
        form
    }

    #[test]
    fn primary_route_opens_webmail_only() {
        let recorder = Recorder::default();
        let mut form = filled();
        let phase = submit_now(&mut form, &recorder).unwrap();

        assert_eq!(phase, SubmissionPhase::Success);
        assert_eq!(recorder.opened.borrow().len(), 1);
        assert!(recorder.opened.borrow()[0].starts_with("https://mail.google.com/mail/?view=cm"));
        assert!(recorder.navigated.borrow().is_empty());
    }

    #[test]
    fn blocked_popup_falls_back_to_mailto_and_still_succeeds() {
        let recorder = Recorder {
            block_open: true,
            ..Recorder::default()
        };
        let mut form = filled();
        let phase = submit_now(&mut form, &recorder).unwrap();

        assert_eq!(phase, SubmissionPhase::Success);
        assert_eq!(recorder.navigated.borrow().len(), 1);
        assert!(recorder.navigated.borrow()[0].starts_with("mailto:anita.mrugesh@gmail.com?subject="));
        assert!(form.fields().is_blank());
    }

    #[test]
    fn both_routes_failing_ends_in_error() {
        let recorder = Recorder {
            block_open: true,
            block_navigate: true,
            ..Recorder::default()
        };
        let mut form = filled();
        let phase = submit_now(&mut form, &recorder).unwrap();

        assert_eq!(phase, SubmissionPhase::Error);
        assert_eq!(form.value(ContactField::Name), "Ravi");
    }

    #[test]
    fn invalid_form_dispatches_nothing() {
        let recorder = Recorder::default();
        let mut form = ContactForm::default();
        let phase = submit_now(&mut form, &recorder).unwrap();

        assert_eq!(phase, SubmissionPhase::Idle);
        assert_eq!(form.errors().len(), 4);
        assert!(recorder.opened.borrow().is_empty());
        assert!(recorder.navigated.borrow().is_empty());
    }

    #[test]
    fn settle_delay_depends_on_route() {
        let config = ComposeConfig::default();
        assert_eq!(
            DispatchRoute::Primary.settle_delay(&config),
            Duration::from_millis(500)
        );
        assert_eq!(
            DispatchRoute::Fallback.settle_delay(&config),
            Duration::from_millis(1000)
        );
    }
}
