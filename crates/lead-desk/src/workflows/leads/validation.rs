use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::form::LeadForm;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// Saudi mobile numbers: 05 followed by eight digits.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^05\d{8}$").expect("phone pattern compiles"));

/// Lead form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    AlternatePhone,
    Whatsapp,
}

impl FormField {
    pub const fn all() -> [Self; 6] {
        [
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::Phone,
            Self::AlternatePhone,
            Self::Whatsapp,
        ]
    }

    pub const fn required(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName | Self::Phone)
    }

    pub const fn is_phone(self) -> bool {
        matches!(self, Self::Phone | Self::AlternatePhone | Self::Whatsapp)
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::AlternatePhone => "alternatePhone",
            Self::Whatsapp => "whatsapp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("must be a valid email address")]
    InvalidEmail,
    #[error("must be a mobile number in the form 05XXXXXXXX")]
    InvalidPhone,
}

/// Keeps only the digits of a phone entry, so `051 234 5678` and
/// `051-234-5678` both become `0512345678`.
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Pattern check run when a field loses focus. Empty values never error here.
pub fn validate_on_blur(field: FormField, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match field {
        FormField::Email if !EMAIL_PATTERN.is_match(value) => Some(FieldError::InvalidEmail),
        field if field.is_phone() && !PHONE_PATTERN.is_match(&normalize_phone(value)) => {
            Some(FieldError::InvalidPhone)
        }
        _ => None,
    }
}

/// Full check run on submit. Any error blocks the whole submission.
pub fn validate_for_submit(form: &LeadForm) -> Result<(), ValidationErrors> {
    let mut errors = BTreeMap::new();

    for field in FormField::all() {
        let value = form.value(field);
        if field.required() && value.trim().is_empty() {
            errors.insert(field, FieldError::Required);
        } else if let Some(error) = validate_on_blur(field, value) {
            errors.insert(field, error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

/// Field-level errors collected from a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn view(&self) -> BTreeMap<&'static str, FieldErrorView> {
        self.fields()
            .map(|(field, error)| (field.key(), FieldErrorView::from(error)))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self
            .fields()
            .map(|(field, error)| format!("{} {}", field.key(), error))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "lead form has {} invalid field(s): {}", self.len(), details)
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorView {
    pub code: FieldError,
    pub message: String,
}

impl From<FieldError> for FieldErrorView {
    fn from(error: FieldError) -> Self {
        Self {
            code: error,
            message: error.to_string(),
        }
    }
}
