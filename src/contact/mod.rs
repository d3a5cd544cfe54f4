//! Contact form submission through EmailJS.

mod config;
mod form;
mod sender;

pub use config::{ConfigError, EmailJsConfig};
pub use form::{
    ContactForm, Field, FormFields, FormState, SubmitError, ValidationError, FALLBACK_ERROR_TEXT,
};
pub use sender::{EmailJsSender, MessageSender, SendError, EMAILJS_ENDPOINT};
