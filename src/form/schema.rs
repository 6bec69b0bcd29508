//! Static description of the form: field kinds, descriptors and the field
//! table rendered by the application.

use std::collections::HashSet;

use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// Input category of a field. Renderer and validator dispatch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Date,
    Number,
    Radio,
    Tel,
    Url,
    Select,
    Textarea,
}

impl FieldKind {
    /// Kinds that offer a fixed set of choices and therefore carry options.
    pub fn has_options(self) -> bool {
        matches!(self, FieldKind::Radio | FieldKind::Select)
    }

    /// Hint shown inside an empty single-line control.
    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Email => "name@example.com",
            FieldKind::Date => "YYYY-MM-DD",
            FieldKind::Number => "0",
            FieldKind::Tel => "+1 555 0100",
            FieldKind::Url => "https://",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub options: &'static [&'static str],
    pub min: Option<f64>,
    pub min_length: Option<usize>,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            options: &[],
            min: None,
            min_length: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn options(self, options: &'static [&'static str]) -> Self {
        Self { options, ..self }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn min_length(self, min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            ..self
        }
    }

    /// Label of the "no selection" entry of a select control.
    pub fn select_placeholder(&self) -> String {
        format!("-- Select {} --", self.label)
    }
}

/// Name of the field checked against the `password` entry.
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const PASSWORD: &str = "password";

pub static FIELDS: [FieldDescriptor; 20] = [
    FieldDescriptor::new("fullName", "Full Name", FieldKind::Text).required(),
    FieldDescriptor::new("email", "Email", FieldKind::Email).required(),
    FieldDescriptor::new(PASSWORD, "Password", FieldKind::Password)
        .required()
        .min_length(6),
    FieldDescriptor::new(CONFIRM_PASSWORD, "Confirm Password", FieldKind::Password).required(),
    FieldDescriptor::new("birthDate", "Birth Date", FieldKind::Date),
    FieldDescriptor::new("age", "Age", FieldKind::Number)
        .required()
        .min(18.0),
    FieldDescriptor::new("gender", "Gender", FieldKind::Radio)
        .required()
        .options(&["Male", "Female"]),
    FieldDescriptor::new("phone", "Phone Number", FieldKind::Tel).required(),
    FieldDescriptor::new("zipCode", "ZIP Code", FieldKind::Text),
    FieldDescriptor::new("skills", "Skills", FieldKind::Text),
    FieldDescriptor::new("address", "Address", FieldKind::Text),
    FieldDescriptor::new("city", "City", FieldKind::Text),
    FieldDescriptor::new("country", "Country", FieldKind::Text),
    FieldDescriptor::new("occupation", "Occupation", FieldKind::Text),
    FieldDescriptor::new("company", "Company", FieldKind::Text),
    FieldDescriptor::new("role", "User Role", FieldKind::Select).options(&[
        "User",
        "Admin",
        "Manager",
        "Developer",
    ]),
    FieldDescriptor::new("cv", "CV", FieldKind::Textarea),
    FieldDescriptor::new("experience", "Years of Experience", FieldKind::Number),
    FieldDescriptor::new("github", "GitHub Profile", FieldKind::Url),
    FieldDescriptor::new("linkedin", "LinkedIn Profile", FieldKind::Url),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field name `{0}` is declared more than once")]
    DuplicateName(&'static str),

    #[error("field `{name}` of kind {kind} needs at least one option")]
    MissingOptions {
        name: &'static str,
        kind: FieldKind,
    },

    #[error("field `{name}` of kind {kind} cannot carry options")]
    UnexpectedOptions {
        name: &'static str,
        kind: FieldKind,
    },
}

/// A field table whose names are unique and whose options match the kinds.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [FieldDescriptor],
}

impl Schema {
    pub fn new(fields: &'static [FieldDescriptor]) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in fields {
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateName(field.name));
            }
            match (field.kind.has_options(), field.options.is_empty()) {
                (true, true) => {
                    return Err(SchemaError::MissingOptions {
                        name: field.name,
                        kind: field.kind,
                    })
                }
                (false, false) => {
                    return Err(SchemaError::UnexpectedOptions {
                        name: field.name,
                        kind: field.kind,
                    })
                }
                _ => {}
            }
        }
        Ok(Self { fields })
    }

    /// The built-in field table.
    pub fn builtin() -> Result<Self, SchemaError> {
        Self::new(&FIELDS)
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn builtin_table_is_consistent() {
        let schema = Schema::builtin().unwrap();
        assert_eq!(schema.fields().len(), 20);
        assert_eq!(schema.fields()[0].name, "fullName");
        assert_eq!(schema.fields()[19].name, "linkedin");
    }

    #[test]
    fn bounded_fields_carry_their_bounds() {
        let schema = Schema::builtin().unwrap();
        assert_eq!(schema.field("age").unwrap().min, Some(18.0));
        assert_eq!(schema.field(PASSWORD).unwrap().min_length, Some(6));
        assert!(schema.field("experience").unwrap().min.is_none());
        assert!(schema.field("nope").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        static DUP: [FieldDescriptor; 2] = [
            FieldDescriptor::new("city", "City", FieldKind::Text),
            FieldDescriptor::new("city", "Town", FieldKind::Text),
        ];
        assert_eq!(
            Schema::new(&DUP).unwrap_err(),
            SchemaError::DuplicateName("city")
        );
    }

    #[test]
    fn rejects_option_mismatch() {
        static NO_OPTIONS: [FieldDescriptor; 1] =
            [FieldDescriptor::new("role", "Role", FieldKind::Select)];
        static STRAY_OPTIONS: [FieldDescriptor; 1] =
            [FieldDescriptor::new("city", "City", FieldKind::Text).options(&["Oslo"])];

        assert!(matches!(
            Schema::new(&NO_OPTIONS),
            Err(SchemaError::MissingOptions { name: "role", .. })
        ));
        assert!(matches!(
            Schema::new(&STRAY_OPTIONS),
            Err(SchemaError::UnexpectedOptions { name: "city", .. })
        ));
    }

    #[test]
    fn kind_names_are_lowercase() {
        assert_eq!(FieldKind::Textarea.to_string(), "textarea");
        assert_eq!(FieldKind::from_str("tel").unwrap(), FieldKind::Tel);
        let with_options: Vec<_> = FieldKind::iter().filter(|k| k.has_options()).collect();
        assert_eq!(with_options, vec![FieldKind::Radio, FieldKind::Select]);
    }

    #[test]
    fn select_placeholder_names_the_field() {
        let role = Schema::builtin().unwrap().field("role").unwrap();
        assert_eq!(role.select_placeholder(), "-- Select User Role --");
    }
}
