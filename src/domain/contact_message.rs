//! src/domain/contact_message.rs

use crate::domain::escaped_text::EscapedText;
use crate::domain::validation::{Field, ValidationError};

#[derive(Debug, Clone)]
pub struct ContactMessage(EscapedText);

impl ContactMessage {
    pub fn parse(s: &str) -> Result<ContactMessage, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField(Field::Message));
        }

        Ok(Self(EscapedText::escape(trimmed)))
    }

    pub fn escaped(&self) -> &EscapedText {
        &self.0
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}
