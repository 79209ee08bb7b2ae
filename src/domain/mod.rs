pub mod application;
pub mod contact_message;
pub mod contact_name;
pub mod contact_response;
pub mod escaped_text;
pub mod phone_number;
pub mod submission;
pub mod validation;

pub use application::{ExposeDiagnostics, LandingPage};
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_response::ContactResponse;
pub use escaped_text::EscapedText;
pub use phone_number::PhoneNumber;
pub use submission::Submission;
pub use validation::{Field, ValidationError, ValidationErrors};
