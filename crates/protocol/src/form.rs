//! Contact form state and validation.
//!
//! The form collects a name, an email and a message. Field values are stored
//! exactly as typed; trimming only happens when a submission is accepted.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of the three contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// The sender's name.
    #[default]
    Name,
    /// The sender's email address.
    Email,
    /// The message body.
    Message,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Returns the hint shown while the field is empty.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "Enter your email",
            Self::Message => "Enter your message",
        }
    }

    /// Returns the following field, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Returns the preceding field, wrapping to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// Raw, untrimmed form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    /// The name field.
    pub name: String,
    /// The email field.
    pub email: String,
    /// The message field.
    pub message: String,
}

impl FormData {
    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// A trimmed snapshot of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Trimmed name.
    pub name: String,
    /// Trimmed email.
    pub email: String,
    /// Trimmed message.
    pub message: String,
}

impl Submission {
    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }
}

/// Validation failures reported by [`ContactForm::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// At least one field is blank after trimming.
    #[error("All fields are required.")]
    MissingField,
}

/// The contact form widget state.
///
/// # Examples
///
/// ```
/// use fourfold_protocol::{ContactForm, FormField};
///
/// let mut form = ContactForm::new();
/// form.update_field(FormField::Name, " Bob ");
/// form.update_field(FormField::Email, "bob@example.com");
/// form.update_field(FormField::Message, "hi");
///
/// let submission = form.submit().unwrap();
/// assert_eq!(submission.name, "Bob");
/// assert_eq!(form.data().name, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: FormData,
    submission: Option<Submission>,
    error: Option<FormError>,
}

impl ContactForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current raw field values.
    #[must_use]
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Returns the last accepted submission.
    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Returns the validation error of the last submit attempt.
    #[must_use]
    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    /// Replaces a field value verbatim.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.data.slot_mut(field) = value.into();
    }

    /// Appends a typed character to a field.
    pub fn push_char(&mut self, field: FormField, ch: char) {
        let mut value = self.data.get(field).to_owned();
        value.push(ch);
        self.update_field(field, value);
    }

    /// Removes the last character of a field.
    pub fn pop_char(&mut self, field: FormField) {
        let mut value = self.data.get(field).to_owned();
        if value.pop().is_some() {
            self.update_field(field, value);
        }
    }

    /// Attempts to submit the form.
    ///
    /// Clears any previous error first. If a field is blank after trimming,
    /// records [`FormError::MissingField`] and leaves the field values and
    /// the previous submission untouched. Otherwise stores the trimmed
    /// snapshot and empties the form.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingField`] when any field is blank.
    pub fn submit(&mut self) -> Result<&Submission, FormError> {
        self.error = None;

        let name = self.data.name.trim();
        let email = self.data.email.trim();
        let message = self.data.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            debug!("contact form rejected: blank field");
            self.error = Some(FormError::MissingField);
            return Err(FormError::MissingField);
        }

        let submission = Submission {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        };
        self.data = FormData::default();
        debug!(name = %submission.name, "contact form accepted");
        let stored = self.submission.insert(submission);
        Ok(&*stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(FormField::Name, name);
        form.update_field(FormField::Email, email);
        form.update_field(FormField::Message, message);
        form
    }

    #[test]
    fn new_form_is_empty() {
        let form = ContactForm::new();
        assert_eq!(form.data(), &FormData::default());
        assert!(form.submission().is_none());
        assert!(form.error().is_none());
    }

    #[test]
    fn update_field_stores_raw_value() {
        let mut form = ContactForm::new();
        form.update_field(FormField::Email, "  spaced@x.com ");
        assert_eq!(form.data().email, "  spaced@x.com ");
        assert_eq!(form.data().name, "");
    }

    #[test]
    fn submit_trims_and_resets() {
        let mut form = filled(" Bob ", " b@x.com ", " hi ");

        let submission = form.submit().expect("valid form").clone();

        assert_eq!(
            submission,
            Submission {
                name: "Bob".into(),
                email: "b@x.com".into(),
                message: "hi".into(),
            }
        );
        assert_eq!(form.data(), &FormData::default());
        assert!(form.error().is_none());
    }

    #[test]
    fn blank_field_blocks_submit() {
        let mut form = filled("Bob", "b@x.com", "");

        assert_eq!(form.submit(), Err(FormError::MissingField));
        assert_eq!(form.error(), Some(FormError::MissingField));
        assert!(form.submission().is_none());
        assert_eq!(form.data().name, "Bob");
        assert_eq!(form.data().email, "b@x.com");
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut form = filled("Bob", "   ", "hello");
        assert!(form.submit().is_err());
        assert_eq!(form.data().email, "   ");
    }

    #[test]
    fn failed_submit_keeps_previous_submission() {
        let mut form = filled("Ann", "a@x.com", "first");
        form.submit().expect("valid form");

        form.update_field(FormField::Name, "Bob");
        assert!(form.submit().is_err());

        assert_eq!(form.submission().map(|s| s.name.as_str()), Some("Ann"));
    }

    #[test]
    fn successful_submit_clears_previous_error() {
        let mut form = filled("Bob", "", "hi");
        assert!(form.submit().is_err());

        form.update_field(FormField::Email, "b@x.com");
        form.submit().expect("valid form");

        assert!(form.error().is_none());
        assert_eq!(form.submission().map(|s| s.email.as_str()), Some("b@x.com"));
    }

    #[test]
    fn second_submit_replaces_first() {
        let mut form = filled("Ann", "a@x.com", "first");
        form.submit().expect("valid form");
        form.update_field(FormField::Name, "Bob");
        form.update_field(FormField::Email, "b@x.com");
        form.update_field(FormField::Message, "second");
        form.submit().expect("valid form");

        insta::assert_debug_snapshot!(form.submission(), @r#"
        Some(
            Submission {
                name: "Bob",
                email: "b@x.com",
                message: "second",
            },
        )
        "#);
    }

    #[test]
    fn push_and_pop_edit_one_field() {
        let mut form = ContactForm::new();
        for ch in "hey".chars() {
            form.push_char(FormField::Message, ch);
        }
        form.pop_char(FormField::Message);
        form.pop_char(FormField::Name);

        assert_eq!(form.data().message, "he");
        assert_eq!(form.data().name, "");
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn error_message_is_combined() {
        assert_eq!(FormError::MissingField.to_string(), "All fields are required.");
    }
}
