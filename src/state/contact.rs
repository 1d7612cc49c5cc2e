use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The `name`/`id` attribute of the matching input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFieldError {
    #[error("unknown contact field: {0}")]
    Unknown(String),
}

impl FromStr for ContactField {
    type Err = ContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "message" => Ok(Self::Message),
            other => Err(ContactFieldError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Empty,
    Edited,
}

/// What got sent. Returned by [`ContactForm::submit`], once per accepted submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactSubmission,
    edited: [bool; 4],
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.values.name,
            ContactField::Email => &self.values.email,
            ContactField::Subject => &self.values.subject,
            ContactField::Message => &self.values.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.values.name,
            ContactField::Email => &mut self.values.email,
            ContactField::Subject => &mut self.values.subject,
            ContactField::Message => &mut self.values.message,
        };
        *slot = value.into();
        self.edited[field as usize] = true;
    }

    /// Updates the field whose input carries `name`. Unknown names leave the
    /// form untouched.
    pub fn set_named_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<ContactField, ContactFieldError> {
        let field = name.parse()?;
        self.set_field(field, value);
        Ok(field)
    }

    pub fn status(&self, field: ContactField) -> FieldStatus {
        if self.edited[field as usize] {
            FieldStatus::Edited
        } else {
            FieldStatus::Empty
        }
    }

    /// True when every field has something in it. The browser's `required`
    /// hints normally guarantee this before a submit gets through.
    pub fn is_complete(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|f| !self.get(*f).trim().is_empty())
    }

    /// Accepts the form as it stands and resets every field.
    pub fn submit(&mut self) -> ContactSubmission {
        std::mem::take(self).values
    }

    /// Submits and hands the result to `sink`, exactly once per call.
    pub fn submit_to(&mut self, sink: &impl ContactSink) -> ContactSubmission {
        let submission = self.submit();
        sink.deliver(&submission);
        submission
    }
}

/// Receives accepted submissions.
pub trait ContactSink {
    fn deliver(&self, submission: &ContactSubmission);
}

/// Only logs the submission; there is no backend behind the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, submission: &ContactSubmission) {
        match serde_json::to_string(submission) {
            Ok(json) => log::info!("Form submitted: {json}"),
            Err(e) => log::warn!("Form submitted but could not be serialized: {e}"),
        }
    }
}
