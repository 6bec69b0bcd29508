//! Per-field validation rules and the error map built on submit.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::record::{FieldValue, FormRecord};
use super::schema::{FieldDescriptor, FieldKind, CONFIRM_PASSWORD, PASSWORD};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$").unwrap()
});

/// Checks one field against the whole record. Rules run in order and the
/// first failing rule's message is returned; `None` means the value passes.
pub fn validate_field(
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
    record: &FormRecord,
) -> Option<String> {
    let blank = value.map_or(true, FieldValue::is_blank);
    let text = value.map(FieldValue::as_text).unwrap_or_default();

    if field.required && blank {
        return Some(format!("{} is required.", field.label));
    }

    if field.name == CONFIRM_PASSWORD && text != record.text(PASSWORD) {
        return Some("Passwords do not match.".to_string());
    }

    if field.kind == FieldKind::Email && !text.is_empty() && !EMAIL_RE.is_match(&text) {
        return Some("Invalid email format.".to_string());
    }

    // Bounds only apply to values that were actually entered.
    if blank {
        return None;
    }

    if let Some(min) = field.min {
        if as_number(&text).is_some_and(|n| n < min) {
            return Some(format!("{} must be at least {}.", field.label, min));
        }
    }

    if let Some(min_length) = field.min_length {
        if text.chars().count() < min_length {
            return Some(format!(
                "{} must be at least {} characters.",
                field.label, min_length
            ));
        }
    }

    None
}

/// Numeric reading of a control value. Whitespace-only text reads as zero;
/// anything else that does not parse has no numeric value.
fn as_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse().ok()
}

/// Field name to failure message, rebuilt from scratch on every submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<&'static str, String>,
}

impl ErrorMap {
    /// Runs every field's rules against `record`, in table order.
    pub fn collect(fields: &'static [FieldDescriptor], record: &FormRecord) -> Self {
        let errors = fields
            .iter()
            .filter_map(|field| {
                validate_field(field, record.get(field.name), record).map(|msg| (field.name, msg))
            })
            .collect();
        Self { errors }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(name, msg)| (*name, msg.as_str()))
    }
}
