//! Form state for one mounted instance: the record being edited, the errors
//! of the last submit, and the submit step that validates everything.

pub mod record;
pub mod schema;
pub mod validate;

pub use record::{Edit, FieldValue, FormRecord};
pub use schema::{FieldDescriptor, FieldKind, Schema, SchemaError, FIELDS};
pub use validate::{validate_field, ErrorMap};

/// Where an instance stands between edits and submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Pristine,
    Editing,
    Invalid,
    Submitted,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Every field passed; carries the record as it was submitted.
    Accepted(FormRecord),
    /// At least one field failed; carries the number of failing fields.
    Rejected(usize),
}

#[derive(Debug, Clone)]
pub struct SmartForm {
    schema: Schema,
    record: FormRecord,
    errors: ErrorMap,
    phase: Phase,
}

impl SmartForm {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            record: FormRecord::new(),
            errors: ErrorMap::default(),
            phase: Phase::Pristine,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Applies one edit. Errors from the last submit stay as they are.
    pub fn change(&mut self, name: &str, edit: Edit) {
        self.record.apply(name, edit);
        self.phase = Phase::Editing;
    }

    /// Validates every field in table order and replaces the error map.
    /// The record is kept either way.
    pub fn submit(&mut self) -> Submission {
        self.errors = ErrorMap::collect(self.schema.fields(), &self.record);

        if self.errors.is_empty() {
            self.phase = Phase::Submitted;
            Submission::Accepted(self.record.clone())
        } else {
            self.phase = Phase::Invalid;
            Submission::Rejected(self.errors.len())
        }
    }
}
