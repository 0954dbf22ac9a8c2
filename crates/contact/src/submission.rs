use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::{Field, FieldErrors};

pub const NAME_MIN_LENGTH: u64 = 2;
pub const MESSAGE_MIN_LENGTH: u64 = 10;

// `user@domain.tld`: no leading dot or `..` in the local part, alphabetic TLD of two or more letters.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z0-9_'+\-]+\.)*[a-z0-9_'+\-]*[a-z0-9_+\-]@(?:[a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$",
    )
    .unwrap()
});

/// Raw values as typed into the contact form.
#[derive(Validate, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ContactFields {
    #[validate(length(min = NAME_MIN_LENGTH))]
    pub name: String,
    #[validate(regex(path = *RE_EMAIL))]
    pub email: String,
    pub company: String,
    #[validate(length(min = MESSAGE_MIN_LENGTH))]
    pub message: String,
}

/// Minimum character count enforced on a field, zero when unconstrained.
pub fn min_length(field: Field) -> usize {
    let min = match field {
        Field::Name => NAME_MIN_LENGTH,
        Field::Message => MESSAGE_MIN_LENGTH,
        Field::Email | Field::Company => 0,
    };

    min as usize
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    /// Runs the whole schema and reports every violated field.
    pub fn check(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from(&errors),
        }
    }

    pub fn into_submission(self) -> clarkston_shared::Result<ContactSubmission> {
        self.validate()?;

        let company = (!self.company.trim().is_empty()).then_some(self.company);

        Ok(ContactSubmission {
            name: self.name,
            email: self.email,
            company,
            message: self.message,
        })
    }
}

/// A contact request that passed validation, ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationKind;

    fn valid() -> ContactFields {
        ContactFields {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            company: "Acme".to_owned(),
            message: "This is a sufficiently long message.".to_owned(),
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactFields::default().check();

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::Name),
            Some(ValidationKind::TooShort { min: 2 })
        );
        assert_eq!(errors.get(Field::Email), Some(ValidationKind::InvalidFormat));
        assert_eq!(
            errors.get(Field::Message),
            Some(ValidationKind::TooShort { min: 10 })
        );
        assert_eq!(errors.get(Field::Company), None);
    }

    #[test]
    fn length_boundaries() {
        let mut fields = valid();
        fields.name = "J".to_owned();
        fields.message = "123456789".to_owned();
        assert_eq!(fields.check().fields(), vec![Field::Name, Field::Message]);

        fields.name = "Jo".to_owned();
        fields.message = "1234567890".to_owned();
        assert!(fields.check().is_empty());
    }

    #[test]
    fn lengths_count_characters() {
        let mut fields = valid();
        fields.name = "Zoë".to_owned();
        fields.message = "ééééééééé".to_owned();

        assert_eq!(fields.check().fields(), vec![Field::Message]);
    }

    #[test]
    fn email_shapes() {
        for email in [
            "john",
            "john@",
            "@example.com",
            "john doe@example.com",
            "john@localhost",
            "john@example.",
            "john@example.c",
            "john@example.123",
            "john@127.0.0.1",
            "john@[127.0.0.1]",
            "john..doe@example.com",
            ".john@example.com",
            "john.@example.com",
            "john@-example.com",
            "",
        ] {
            let mut fields = valid();
            fields.email = email.to_owned();
            assert_eq!(
                fields.check().get(Field::Email),
                Some(ValidationKind::InvalidFormat),
                "{email} should be rejected"
            );
        }

        for email in [
            "john@example.com",
            "j.doe+site@mail.example.co.uk",
            "o'brien@example.com",
            "JOHN_DOE@Example.COM",
            "john@my-company.io",
        ] {
            let mut fields = valid();
            fields.email = email.to_owned();
            assert!(fields.check().is_empty(), "{email} should be accepted");
        }
    }

    #[test]
    fn company_is_unconstrained() {
        for company in ["", "A", "  ", "<b>Acme & Sons</b>"] {
            let mut fields = valid();
            fields.company = company.to_owned();
            assert!(fields.check().is_empty());
        }
    }

    #[test]
    fn into_submission_drops_blank_company() {
        let mut fields = valid();
        fields.company = "   ".to_owned();
        let submission = fields.into_submission().unwrap();
        assert_eq!(submission.company, None);

        let submission = valid().into_submission().unwrap();
        assert_eq!(submission.company.as_deref(), Some("Acme"));
        assert_eq!(submission.name, "John Doe");
    }

    #[test]
    fn into_submission_rejects_invalid_input() {
        let err = ContactFields::default().into_submission().unwrap_err();
        let errors = err.validation().map(FieldErrors::from).unwrap();

        assert_eq!(errors.len(), 3);
    }
}
