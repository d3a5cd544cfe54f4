//! Contact form flow against a scripted sender.

use std::cell::Cell;

use cybernode::contact::{
    ContactForm, EmailJsConfig, FormFields, FormState, MessageSender, SendError, SubmitError,
    FALLBACK_ERROR_TEXT,
};

/// Fails the first `failures` sends, then succeeds
struct FlakySender {
    failures: Cell<usize>,
    sent: Cell<usize>,
}

impl MessageSender for FlakySender {
    fn send(&self, _: &str, _: &str, _: &FormFields, _: &str) -> Result<(), SendError> {
        self.sent.set(self.sent.get() + 1);
        if self.failures.get() > 0 {
            self.failures.set(self.failures.get() - 1);
            return Err(SendError::new(""));
        }
        Ok(())
    }
}

#[test]
fn retry_after_failure_succeeds() {
    let sender = FlakySender {
        failures: Cell::new(1),
        sent: Cell::new(0),
    };
    let config = EmailJsConfig::new("svc", "tpl", "pk");
    let fields = FormFields::new("Ada", "ada@example.com", "Hello");
    let mut form = ContactForm::new();

    let state = form.submit(&sender, &config, &fields).unwrap().clone();
    assert_eq!(state, FormState::Error(FALLBACK_ERROR_TEXT.to_string()));

    // A settled form must be reset before the next submission
    assert!(matches!(
        form.submit(&sender, &config, &fields),
        Err(SubmitError::NotIdle("error"))
    ));
    assert_eq!(sender.sent.get(), 1);

    assert!(form.reset());
    let state = form.submit(&sender, &config, &fields).unwrap();
    assert_eq!(state, &FormState::Success);
    assert_eq!(sender.sent.get(), 2);
}

#[test]
fn invalid_email_is_not_sent() {
    let sender = FlakySender {
        failures: Cell::new(0),
        sent: Cell::new(0),
    };
    let config = EmailJsConfig::new("svc", "tpl", "pk");
    let fields = FormFields::new("Ada", "not-an-email", "Hello");
    let mut form = ContactForm::new();

    assert!(matches!(
        form.submit(&sender, &config, &fields),
        Err(SubmitError::Invalid(_))
    ));
    assert_eq!(sender.sent.get(), 0);
    assert_eq!(form.state(), &FormState::Idle);
}
