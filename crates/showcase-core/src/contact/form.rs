use std::fmt;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::endpoint::ContactEndpoint;
use crate::config::ContactConfig;
use crate::{Error, Result};

/// Minimum message length in characters
pub const MIN_MESSAGE_CHARS: usize = 10;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Fields in form order
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Wrap-around navigation between fields
    pub fn next(&self) -> ContactField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> ContactField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Payload delivered to the contact endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim(),
        )
    }

    /// Check every field after trimming. Whitespace-only values count as
    /// missing and the message length is measured without the padding.
    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.push(ContactField::Name, "Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ContactField::Email, "Email is required");
        } else if !email_pattern().is_match(email) {
            errors.push(ContactField::Email, "Invalid email");
        }

        if self.subject.trim().is_empty() {
            errors.push(ContactField::Subject, "Subject is required");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(ContactField::Message, "Message is required");
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(ContactField::Message, "Message must be at least 10 characters");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Per-field validation messages, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(ContactField, &'static str)>);

impl FieldErrors {
    fn push(&mut self, field: ContactField, message: &'static str) {
        self.0.push((field, message));
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    pub fn clear_field(&mut self, field: ContactField) {
        self.0.retain(|(f, _)| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|(_, m)| *m).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Submission lifecycle. `Success` and `Error` revert to `Idle` on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success { at: Instant },
    Error { at: Instant, message: String },
}

impl SubmitStatus {
    fn settled_at(&self) -> Option<Instant> {
        match self {
            SubmitStatus::Success { at } | SubmitStatus::Error { at, .. } => Some(*at),
            _ => None,
        }
    }
}

/// Draft, validation messages and submission status of the contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    draft: ContactMessage,
    errors: FieldErrors,
    status: SubmitStatus,
    reset_after: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl ContactForm {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            draft: ContactMessage::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
            reset_after,
        }
    }

    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(Duration::from_secs(config.status_reset_secs))
    }

    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Replace a field value, clearing its validation message
    pub fn set_field(&mut self, field: ContactField, value: &str) {
        *self.draft.field_mut(field) = value.to_string();
        self.errors.clear_field(field);
    }

    pub fn push_char(&mut self, field: ContactField, c: char) {
        self.draft.field_mut(field).push(c);
        self.errors.clear_field(field);
    }

    pub fn pop_char(&mut self, field: ContactField) {
        self.draft.field_mut(field).pop();
        self.errors.clear_field(field);
    }

    /// Validate the draft and enter `Submitting`. Returns the trimmed payload
    /// to send.
    ///
    /// Invalid drafts keep the form out of `Submitting` and record the
    /// per-field messages.
    pub fn begin_submit(&mut self) -> Result<ContactMessage> {
        if self.is_submitting() {
            return Err(Error::Submission("A submission is already in progress".to_string()));
        }

        if let Err(errors) = self.draft.validate() {
            let summary = errors.to_string();
            self.errors = errors;
            return Err(Error::Validation(summary));
        }

        let payload = self.draft.trimmed();
        self.errors = FieldErrors::default();
        self.status = SubmitStatus::Submitting;
        tracing::info!("Submitting contact form from {}", payload.email);
        Ok(payload)
    }

    /// Record the endpoint's answer. Success clears the draft, failure keeps
    /// it for a retry. Ignored unless a submission is in flight.
    pub fn finish(&mut self, outcome: Result<()>, now: Instant) -> bool {
        if !self.is_submitting() {
            return false;
        }

        match outcome {
            Ok(()) => {
                tracing::info!("Contact form delivered");
                self.draft = ContactMessage::default();
                self.status = SubmitStatus::Success { at: now };
            }
            Err(e) => {
                tracing::warn!("Contact form submission failed: {}", e);
                self.status = SubmitStatus::Error {
                    at: now,
                    message: e.to_string(),
                };
            }
        }
        true
    }

    /// Validate, send through `endpoint` and record the outcome
    pub async fn submit(&mut self, endpoint: &dyn ContactEndpoint) -> Result<()> {
        let message = self.begin_submit()?;
        let outcome = endpoint.send(&message).await;
        let result = match &outcome {
            Ok(()) => Ok(()),
            Err(e) => Err(Error::Submission(e.to_string())),
        };
        self.finish(outcome, Instant::now());
        result
    }

    /// Revert a settled banner once its display time has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.status.settled_at() {
            Some(at) if now.saturating_duration_since(at) >= self.reset_after => {
                self.status = SubmitStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// Close the error banner early
    pub fn dismiss_error(&mut self) -> bool {
        if matches!(self.status, SubmitStatus::Error { .. }) {
            self.status = SubmitStatus::Idle;
            true
        } else {
            false
        }
    }
}
