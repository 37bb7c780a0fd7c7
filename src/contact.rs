use std::{collections::BTreeMap, sync::LazyLock};

use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Subject)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} field(s) need attention")]
    Invalid(usize),
    #[error("A message is already being sent")]
    Busy,
    #[error("Message could not be sent: {0}")]
    Delivery(String),
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.chars().count() < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

/// Deliberately permissive: one `@` with a dot somewhere after it.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    if value.chars().count() < MESSAGE_MIN_CHARS {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
        Field::Subject => Ok(()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    data: ContactSubmission,
    errors: BTreeMap<Field, FieldError>,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactSubmission {
        &self.data
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    /// Stores the new value and re-validates that field only.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match validate_field(field, &value) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
        *self.data.get_mut(field) = value;
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Sending
            && Field::REQUIRED
                .iter()
                .all(|f| !self.data.get(*f).is_empty())
            && self.errors.is_empty()
    }

    /// Validates every required field and moves to [`FormStatus::Sending`].
    /// On failure the field errors are replaced and the status is untouched.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitError> {
        if self.status == FormStatus::Sending {
            return Err(SubmitError::Busy);
        }
        let errors: BTreeMap<Field, FieldError> = Field::REQUIRED
            .iter()
            .filter_map(|f| validate_field(*f, self.data.get(*f)).err().map(|e| (*f, e)))
            .collect();
        if !errors.is_empty() {
            let count = errors.len();
            self.errors = errors;
            return Err(SubmitError::Invalid(count));
        }
        self.status = FormStatus::Sending;
        Ok(self.data.clone())
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if self.status != FormStatus::Sending {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.data = ContactSubmission::default();
                self.errors.clear();
            }
            Err(_) => self.status = FormStatus::Error,
        }
    }

    /// Called when the success or error banner times out.
    pub fn dismiss_status(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
        }
    }
}

/// Stand-in for a mail service: logs the payload and reports success.
pub fn deliver(submission: &ContactSubmission) -> Result<(), SubmitError> {
    let payload =
        serde_json::to_string(submission).map_err(|e| SubmitError::Delivery(e.to_string()))?;
    info!("Form submitted: {payload}");
    Ok(())
}
