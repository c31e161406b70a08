//! Contact form submission model.
//!
//! DESIGN
//! ======
//! A submission tries the injected [`EmailTransport`] first. Any failure, an
//! unavailable capability included, is logged and routed to the `mailto:`
//! fallback, which re-reads the fields before validating them. The outcome
//! maps to exactly one notification and one terminal [`SubmitState`].

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use crate::net::emailjs::EmailTransport;
use crate::state::notification::Severity;
use crate::util::mailto::build_mailto;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FALLBACK_MESSAGE: &str = "Opening your email client... Please send the pre-filled email.";
pub const INVALID_MESSAGE: &str = "Please fill in all fields before sending.";

/// Snapshot of the four required form controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(Field),
}

impl ContactFields {
    /// Presence check only; the first empty field in form order is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first empty value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let checks = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ];
        match checks.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ValidationError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// Lifecycle of the submit control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Remote send failed and the fallback refused to open an empty draft.
    Rejected,
    FallbackSent,
}

impl SubmitState {
    /// Only `Submitting` keeps the button disabled.
    pub fn is_busy(self) -> bool {
        self == Self::Submitting
    }

    /// Enter `Submitting`, or `None` while a submission is already in flight.
    pub fn begin(self) -> Option<Self> {
        if self.is_busy() { None } else { Some(Self::Submitting) }
    }

    /// Leave a terminal state once its outcome has been reported.
    pub fn finish(self) -> Self {
        if self.is_busy() { self } else { Self::Idle }
    }
}

/// Terminal result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    FallbackOpened { href: String },
    Invalid(ValidationError),
}

impl SubmissionOutcome {
    pub fn notification(&self) -> (&'static str, Severity) {
        match self {
            Self::Sent => (SENT_MESSAGE, Severity::Success),
            Self::FallbackOpened { .. } => (FALLBACK_MESSAGE, Severity::Success),
            Self::Invalid(_) => (INVALID_MESSAGE, Severity::Error),
        }
    }

    pub fn final_state(&self) -> SubmitState {
        match self {
            Self::Sent => SubmitState::Succeeded,
            Self::FallbackOpened { .. } => SubmitState::FallbackSent,
            Self::Invalid(_) => SubmitState::Rejected,
        }
    }

    /// Whether the form should be cleared afterwards.
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Run one submission: remote send, then the fallback on any failure.
///
/// `read_fields` is called once for the send and again for the fallback, so
/// the fallback always sees the controls as they are at that moment.
pub async fn submit<T, F>(transport: &T, read_fields: F, recipient: &str) -> SubmissionOutcome
where
    T: EmailTransport,
    F: Fn() -> ContactFields,
{
    let fields = read_fields();
    match transport.send(&fields).await {
        Ok(()) => SubmissionOutcome::Sent,
        Err(e) => {
            leptos::logging::warn!("email send failed, using mailto fallback: {e}");
            fallback(&read_fields(), recipient)
        }
    }
}

/// Validate `fields` and produce the `mailto:` link to open.
pub fn fallback(fields: &ContactFields, recipient: &str) -> SubmissionOutcome {
    match fields.validate() {
        Ok(()) => SubmissionOutcome::FallbackOpened { href: build_mailto(recipient, fields) },
        Err(e) => SubmissionOutcome::Invalid(e),
    }
}
