// SPDX-License-Identifier: MPL-2.0
//! Contact form state and validation.

use crate::application::port::MailMessage;
use std::fmt;

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }
}

/// Why a form cannot be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty or whitespace only.
    Missing(Field),
    /// The email address is not of the form `local@domain.tld`.
    InvalidEmail,
    /// A submission is already in flight.
    AlreadySubmitting,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Missing(Field::Name) => write!(f, "Please tell me your name."),
            FormError::Missing(Field::Email) => write!(f, "Please enter your email address."),
            FormError::Missing(Field::Message) => write!(f, "Please write a message."),
            FormError::InvalidEmail => write!(f, "Please enter a valid email address."),
            FormError::AlreadySubmitting => write!(f, "Your message is already being sent."),
        }
    }
}

impl std::error::Error for FormError {}

/// State of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    submitting: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of `field`.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Checks every field and builds the message to relay.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in field order.
    pub fn validate(&self) -> Result<MailMessage, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }

        Ok(MailMessage {
            from_name: self.name.trim().to_string(),
            from_email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validates and marks the form as submitting.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate`]; the form is left untouched on error.
    pub fn begin_submit(&mut self) -> Result<MailMessage, FormError> {
        let message = self.validate()?;
        self.submitting = true;
        Ok(message)
    }

    /// Clears the submitting flag; a successful delivery also empties the fields.
    pub fn finish_submit(&mut self, delivered: bool) {
        if delivered {
            *self = Self::default();
        } else {
            self.submitting = false;
        }
    }
}

/// One `@` with a non-empty local part, and a domain of at least two
/// non-empty `.`-separated labels.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
