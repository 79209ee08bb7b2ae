//! src/domain/submission.rs

use crate::domain::contact_message::ContactMessage;
use crate::domain::contact_name::ContactName;
use crate::domain::phone_number::PhoneNumber;
use crate::domain::validation::ValidationErrors;

/// A validated contact form submission, escaped and ready to be mailed.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: ContactName,
    pub phone: PhoneNumber,
    pub message: ContactMessage,
}

impl Submission {
    /// Validates all three fields and reports every problem found, not just the first.
    pub fn parse(name: &str, phone: &str, message: &str) -> Result<Submission, ValidationErrors> {
        match (
            ContactName::parse(name),
            PhoneNumber::parse(phone),
            ContactMessage::parse(message),
        ) {
            (Ok(name), Ok(phone), Ok(message)) => Ok(Self {
                name,
                phone,
                message,
            }),
            (name, phone, message) => Err(ValidationErrors::new(
                [name.err(), phone.err(), message.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use claim::assert_ok;

    use super::Submission;
    use crate::domain::validation::{Field, ValidationError};

    #[test]
    fn every_invalid_field_is_reported() {
        let errors = Submission::parse("", "abc", "").unwrap_err();

        assert_eq!(
            errors.iter().copied().collect::<Vec<_>>(),
            vec![
                ValidationError::MissingField(Field::Name),
                ValidationError::InvalidFormat(Field::Phone),
                ValidationError::MissingField(Field::Message),
            ]
        );
    }

    #[test]
    fn a_single_bad_field_is_reported_alone() {
        let errors = Submission::parse("Asha", "", "Hello").unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.iter().next().map(|e| e.field()),
            Some(Field::Phone)
        );
    }

    #[test]
    fn a_valid_submission_is_parsed_successfully() {
        let submission = assert_ok!(Submission::parse(
            "Asha",
            "9876543210",
            "Need a lehenga for Saturday"
        ));

        assert_eq!(submission.name.as_ref(), "Asha");
        assert_eq!(submission.phone.as_ref(), "9876543210");
        assert_eq!(submission.message.as_ref(), "Need a lehenga for Saturday");
    }

    #[test]
    fn fields_are_escaped_during_parsing() {
        let submission =
            Submission::parse("Tom & Jerry", "9876543210", "<i>urgent</i>").unwrap();

        assert_eq!(submission.name.as_ref(), "Tom &amp; Jerry");
        assert_eq!(submission.message.as_ref(), "&lt;i&gt;urgent&lt;/i&gt;");
    }
}
