use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

/// Current value of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Unset-equivalent: the empty string or an unchecked flag.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(checked) => !checked,
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Flag(checked) => Cow::Owned(checked.to_string()),
        }
    }
}

/// One user edit coming from a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Raw value of a text-like, choice or multi-line control.
    Value(String),
    /// Checked state of a checkbox-like control.
    Checked(bool),
}

/// Field name to current value for one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormRecord {
    values: BTreeMap<String, FieldValue>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change handler: a copy of this record with `name` set from `edit`.
    #[must_use]
    pub fn with(&self, name: &str, edit: Edit) -> Self {
        let mut next = self.clone();
        next.apply(name, edit);
        next
    }

    /// In-place form of [`FormRecord::with`].
    pub fn apply(&mut self, name: &str, edit: Edit) {
        let value = match edit {
            Edit::Value(raw) => FieldValue::Text(raw),
            Edit::Checked(checked) => FieldValue::Flag(checked),
        };
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text of a field, empty when the field was never edited.
    pub fn text(&self, name: &str) -> Cow<'_, str> {
        self.get(name)
            .map(FieldValue::as_text)
            .unwrap_or(Cow::Borrowed(""))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_sets_only_the_named_key() {
        let first = FormRecord::new().with("city", Edit::Value("Oslo".into()));
        let second = first.with("country", Edit::Value("Norway".into()));

        assert_eq!(first.len(), 1);
        assert_eq!(second.text("city"), "Oslo");
        assert_eq!(second.text("country"), "Norway");
    }

    #[test]
    fn checkbox_edit_stores_the_flag() {
        let record = FormRecord::new().with("terms", Edit::Checked(true));
        assert_eq!(record.get("terms"), Some(&FieldValue::Flag(true)));

        let record = record.with("terms", Edit::Checked(false));
        assert!(record.get("terms").unwrap().is_blank());
    }

    #[test]
    fn absent_keys_read_as_empty() {
        let record = FormRecord::new();
        assert!(record.get("city").is_none());
        assert_eq!(record.text("city"), "");
    }

    #[test]
    fn later_edit_replaces_earlier_value() {
        let mut record = FormRecord::new();
        record.apply("age", Edit::Value("17".into()));
        record.apply("age", Edit::Value("18".into()));
        assert_eq!(record.text("age"), "18");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn serializes_as_flat_object() {
        let record = FormRecord::new()
            .with("fullName", Edit::Value("Ada".into()))
            .with("terms", Edit::Checked(true));
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"fullName":"Ada","terms":true}"#
        );
    }
}
