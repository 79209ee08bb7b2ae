//! src/domain/contact_response.rs

use crate::domain::validation::ValidationErrors;

/// JSON body returned by the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Raw transport diagnostic, only present when diagnostics are exposed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub const THANK_YOU: &'static str =
        "Thank you for contacting us! We will get back to you soon.";
    pub const SEND_FAILED: &'static str =
        "Sorry, there was an error sending your message. Please try again later.";

    pub const UNREADABLE: &'static str =
        "Sorry, we could not read your message. Please check it and try again.";

    pub fn delivered() -> Self {
        Self {
            success: true,
            message: Some(Self::THANK_YOU.into()),
            errors: None,
            error: None,
        }
    }

    pub fn rejected(errors: &ValidationErrors) -> Self {
        Self {
            success: false,
            message: None,
            errors: Some(errors.messages()),
            error: None,
        }
    }

    pub fn send_failed(diagnostic: Option<String>) -> Self {
        Self {
            success: false,
            message: Some(Self::SEND_FAILED.into()),
            errors: None,
            error: diagnostic,
        }
    }

    /// The body could not be decoded into form fields at all.
    pub fn unreadable() -> Self {
        Self {
            success: false,
            message: Some(Self::UNREADABLE.into()),
            errors: None,
            error: None,
        }
    }
}
