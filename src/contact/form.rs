//! Contact form fields and submission state machine.

use std::fmt;

use thiserror::Error;

use super::config::EmailJsConfig;
use super::sender::{MessageSender, SendError};

/// Shown when the provider fails without any text of its own
pub const FALLBACK_ERROR_TEXT: &str = "Failed to send message. Please try again.";

/// Form input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Values entered into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Required-field and email-shape checks, run before anything is sent
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }

        if !looks_like_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// `local@domain` with no whitespace and exactly one `@`
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Submission state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    /// Delivery failed; carries the text shown to the user
    Error(String),
}

impl FormState {
    fn label(&self) -> &'static str {
        match self {
            FormState::Idle => "idle",
            FormState::Submitting => "submitting",
            FormState::Success => "success",
            FormState::Error(_) => "error",
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("cannot submit while form is {0}")]
    NotIdle(&'static str),
}

/// Contact form driving `Idle → Submitting → Success | Error`
#[derive(Debug, Clone)]
pub struct ContactForm {
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Validate and move to `Submitting`. Invalid input keeps the form idle.
    pub fn begin(&mut self, fields: &FormFields) -> Result<(), SubmitError> {
        if self.state != FormState::Idle {
            return Err(SubmitError::NotIdle(self.state.label()));
        }
        fields.validate()?;

        self.state = FormState::Submitting;
        Ok(())
    }

    /// Record the delivery outcome. Ignored unless a submission is in flight.
    pub fn finish(&mut self, outcome: Result<(), SendError>) {
        if self.state != FormState::Submitting {
            log::warn!("Ignoring send outcome while form is {}", self.state.label());
            return;
        }

        self.state = match outcome {
            Ok(()) => FormState::Success,
            Err(err) if err.text.trim().is_empty() => {
                FormState::Error(FALLBACK_ERROR_TEXT.to_string())
            }
            Err(err) => FormState::Error(err.text),
        };
    }

    /// Return from a terminal state to `Idle`; reports whether anything changed
    pub fn reset(&mut self) -> bool {
        match self.state {
            FormState::Success | FormState::Error(_) => {
                self.state = FormState::Idle;
                true
            }
            FormState::Idle | FormState::Submitting => false,
        }
    }

    /// Validate, send through `sender`, and settle on the outcome
    pub fn submit<S: MessageSender + ?Sized>(
        &mut self,
        sender: &S,
        config: &EmailJsConfig,
        fields: &FormFields,
    ) -> Result<&FormState, SubmitError> {
        self.begin(fields)?;

        let outcome = sender.send(
            &config.service_id,
            &config.template_id,
            fields,
            &config.public_key,
        );
        if let Err(err) = &outcome {
            log::warn!("Message send failed: {}", err);
        }

        self.finish(outcome);
        Ok(&self.state)
    }
}
