use std::collections::BTreeMap;

use strum::{Display, EnumString, VariantArray};

/// The four inputs of the contact form, in schema order.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Company)
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Message => "textarea",
            Field::Name | Field::Company => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationKind {
    TooShort { min: usize },
    InvalidFormat,
}

impl ValidationKind {
    /// User-facing message rendered next to the offending field.
    pub fn message(&self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, ValidationKind::TooShort { .. }) => "Name must be at least 2 characters",
            (Field::Message, ValidationKind::TooShort { .. }) => {
                "Message must be at least 10 characters"
            }
            (Field::Email, _) => "Invalid email address",
            (_, ValidationKind::TooShort { .. }) => "Value is too short",
            (_, ValidationKind::InvalidFormat) => "Invalid value",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationKind>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, kind: ValidationKind) {
        self.0.insert(field, kind);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<ValidationKind> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationKind)> + '_ {
        self.0.iter().map(|(field, kind)| (*field, *kind))
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|kind| kind.message(field))
    }
}

impl From<&validator::ValidationErrors> for FieldErrors {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut field_errors = FieldErrors::default();

        for (name, errs) in errors.field_errors() {
            let Ok(field) = name.parse::<Field>() else {
                tracing::warn!(field = %name, "Validation error on unknown contact field");
                continue;
            };

            let Some(err) = errs.first() else {
                continue;
            };

            let kind = match &*err.code {
                "length" => ValidationKind::TooShort {
                    min: crate::min_length(field),
                },
                _ => ValidationKind::InvalidFormat,
            };

            field_errors.insert(field, kind);
        }

        field_errors
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn field_wire_names() {
        assert_eq!(Field::Name.to_string(), "name");
        assert_eq!(Field::Company.to_string(), "company");
        assert_eq!(Field::from_str("message").unwrap(), Field::Message);
        assert!(Field::from_str("subject").is_err());
    }

    #[test]
    fn errors_iterate_in_schema_order() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Message, ValidationKind::TooShort { min: 10 });
        errors.insert(Field::Name, ValidationKind::TooShort { min: 2 });
        errors.insert(Field::Email, ValidationKind::InvalidFormat);

        assert_eq!(
            errors.fields(),
            vec![Field::Name, Field::Email, Field::Message]
        );
        assert_eq!(
            errors.message(Field::Email),
            Some("Invalid email address")
        );
        assert_eq!(errors.message(Field::Company), None);
    }
}
