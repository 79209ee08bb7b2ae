//! src/domain/validation.rs

use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Message,
}

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone number",
            Field::Message => "Message",
        }
    }

    fn expected_shape(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "10-digit phone number",
            Field::Message => "message",
        }
    }
}

/// A problem with one field of a contact form submission.
///
/// The `Display` output is shown to the visitor as is.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("Please enter a valid {}", .0.expected_shape())]
    InvalidFormat(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field) | ValidationError::InvalidFormat(field) => *field,
        }
    }
}

/// Every validation error found in a submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
