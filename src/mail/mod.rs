//! Rendering and delivery of contact form emails.
//!
//! [`contact_email`] turns a validated [`Submission`](crate::domain::Submission) into an
//! [`Email`]; a [`Mailer`] delivers it. [`SmtpMailer`] is the production mailer and relays
//! through the SMTP server described by [`EmailSettings`](crate::config::EmailSettings).

mod smtp;
mod template;

use std::fmt::Formatter;

use async_trait::async_trait;

use crate::utils::error_chain_fmt;

pub use smtp::SmtpMailer;
pub use template::{contact_email, SUBJECT};

/// A rendered message. Sender and recipient come from the mailer's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[derive(thiserror::Error)]
pub enum MailError {
    #[error("{0} is not a valid email address")]
    InvalidAddress(String, #[source] lettre::address::AddressError),

    #[error("Failed to build the email message")]
    Build(#[source] lettre::error::Error),

    #[error("The SMTP relay could not deliver the message")]
    Transport(#[source] lettre::transport::smtp::Error),
}

impl std::fmt::Debug for MailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Hands a rendered email to whatever delivers it.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}
