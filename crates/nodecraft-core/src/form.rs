use regex::Regex;
use smallvec::SmallVec;
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::{MESSAGE_MIN_CHARS, NAME_MIN_CHARS};

/// Contact form control kinds, as reported by the control's `type`/tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Text,
    Select,
    TextArea,
    Other,
}

impl FieldKind {
    /// Map an input `type` (or `select-one`) and tag name to a kind.
    pub fn classify(input_type: &str, tag_name: &str) -> Self {
        match input_type {
            "email" => FieldKind::Email,
            "text" => FieldKind::Text,
            "select-one" => FieldKind::Select,
            _ if tag_name.eq_ignore_ascii_case("textarea") => FieldKind::TextArea,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("This field is required")]
    Required,
    #[error("Please enter at least {0} characters")]
    TooShort(usize),
    #[error("Please select an option")]
    NoSelection,
    #[error("Please enter your message")]
    MessageRequired,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Validate one control's raw value. Whitespace is trimmed before any check.
pub fn validate_field(kind: FieldKind, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    let chars = value.chars().count();
    match kind {
        FieldKind::Email if value.is_empty() => Err(FieldError::EmailRequired),
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::EmailInvalid),
        FieldKind::Text if value.is_empty() => Err(FieldError::Required),
        FieldKind::Text if chars < NAME_MIN_CHARS => Err(FieldError::TooShort(NAME_MIN_CHARS)),
        FieldKind::Select if value.is_empty() => Err(FieldError::NoSelection),
        FieldKind::TextArea if value.is_empty() => Err(FieldError::MessageRequired),
        FieldKind::TextArea if chars < MESSAGE_MIN_CHARS => {
            Err(FieldError::TooShort(MESSAGE_MIN_CHARS))
        }
        _ => Ok(()),
    }
}

/// Form-wide failures. At most a handful of controls exist.
pub type FieldIssues = SmallVec<[(usize, FieldError); 5]>;

/// Validate every `(kind, value)` control; returns the failing indices.
pub fn validate_all<'a, I>(fields: I) -> FieldIssues
where
    I: IntoIterator<Item = (FieldKind, &'a str)>,
{
    fields
        .into_iter()
        .enumerate()
        .filter_map(|(i, (kind, value))| validate_field(kind, value).err().map(|e| (i, e)))
        .collect()
}

pub const FORM_INVALID_MESSAGE: &str = "Please correct the errors in the form";
pub const SENDING_LABEL: &str = "<span>Sending...</span>";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn thank_you(&self) -> String {
        format!(
            "🚀 Thank you, {}!\n\nYour {} project inquiry has been sent successfully. Our VFX team will review your requirements and get back to you within 24 hours.\n\n✨ We're excited to bring your vision to life with cutting-edge visual effects!",
            self.first_name.trim(),
            self.project_type.trim()
        )
    }
}
