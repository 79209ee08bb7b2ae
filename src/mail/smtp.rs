use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::{EmailSettings, TransportSecurity};
use crate::mail::{Email, MailError, Mailer};

/// Delivers emails through an SMTP relay.
///
/// Built once at startup from [`EmailSettings`] and shared by every request; each
/// send opens its own connection.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn from_settings(settings: &EmailSettings) -> Result<Self, MailError> {
        let from = mailbox(&settings.from_name, &settings.from_email)?;
        let to = mailbox(&settings.to_name, &settings.to_email)?;

        let mut builder = match settings.security {
            TransportSecurity::Smtps => {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
                    .map_err(MailError::Transport)?
            }
            TransportSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
                    .map_err(MailError::Transport)?
            }
            TransportSecurity::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.smtp_host)
            }
        };

        builder = builder
            .port(settings.smtp_port)
            .timeout(Some(settings.timeout()));

        // Local relays usually refuse AUTH, so credentials are optional.
        if !settings.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                settings.username.clone(),
                settings.password.expose_secret().clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            to,
        })
    }

    fn build_message(&self, email: &Email) -> Result<Message, MailError> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(&email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))
            .map_err(MailError::Build)
    }
}

fn mailbox(name: &str, email: &str) -> Result<Mailbox, MailError> {
    let address: Address = email
        .parse()
        .map_err(|e| MailError::InvalidAddress(email.to_string(), e))?;
    let name = Some(name.to_string()).filter(|n| !n.is_empty());
    Ok(Mailbox::new(name, address))
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(name = "Relaying email over SMTP", skip_all, fields(subject = %email.subject))]
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let message = self.build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(MailError::Transport)?;

        tracing::info!(smtp.code = %response.code(), "Email accepted by the relay");
        Ok(())
    }
}
