//! src/domain/contact_name.rs

use crate::domain::escaped_text::EscapedText;
use crate::domain::validation::{Field, ValidationError};

#[derive(Debug, Clone)]
pub struct ContactName(EscapedText);

impl ContactName {
    pub fn parse(s: &str) -> Result<ContactName, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField(Field::Name));
        }

        Ok(Self(EscapedText::escape(trimmed)))
    }

    pub fn escaped(&self) -> &EscapedText {
        &self.0
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}
