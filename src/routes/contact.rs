//! The contact form endpoint.

use std::fmt::Formatter;

use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_multipart::MultipartError;
use actix_web::error::{InternalError, UrlencodedError};
use actix_web::guard::GuardContext;
use actix_web::http::header::{CONTENT_TYPE, LOCATION};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::domain::{ContactResponse, ExposeDiagnostics, LandingPage, Submission, ValidationErrors};
use crate::mail::{contact_email, MailError, Mailer};
use crate::utils::{error_chain_fmt, error_chain_line};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("The submission failed validation: {0}")]
    Validation(ValidationErrors),

    #[error("Failed to send the contact email")]
    Transport(#[source] MailError),

    #[error("The request body could not be decoded: {0}")]
    Unreadable(String),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) | ContactError::Unreadable(_) => StatusCode::BAD_REQUEST,
            ContactError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The JSON body the visitor gets. Transport details stay out of it unless
    /// diagnostics are exposed.
    fn to_response(&self, diagnostics: ExposeDiagnostics) -> HttpResponse {
        let body = match self {
            ContactError::Validation(errors) => ContactResponse::rejected(errors),
            ContactError::Transport(e) => {
                ContactResponse::send_failed(diagnostics.0.then(|| error_chain_line(e)))
            }
            ContactError::Unreadable(_) => ContactResponse::unreadable(),
        };
        HttpResponse::build(self.status_code()).json(body)
    }

    fn into_internal(self, diagnostics: ExposeDiagnostics) -> InternalError<ContactError> {
        let response = self.to_response(diagnostics);
        InternalError::from_response(self, response)
    }
}

/// Missing fields deserialize as empty strings so they are reported like blank ones.
#[derive(serde::Deserialize)]
pub struct ContactFormData {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    message: String,
}

/// The same three fields sent as `multipart/form-data`, which is what a browser
/// `FormData` produces.
#[derive(MultipartForm)]
pub struct ContactMultipartData {
    name: Option<Text<String>>,
    phone: Option<Text<String>>,
    message: Option<Text<String>>,
}

impl From<ContactMultipartData> for ContactFormData {
    fn from(form: ContactMultipartData) -> Self {
        let text = |field: Option<Text<String>>| field.map(|t| t.0).unwrap_or_default();
        Self {
            name: text(form.name),
            phone: text(form.phone),
            message: text(form.message),
        }
    }
}

impl TryFrom<ContactFormData> for Submission {
    type Error = ValidationErrors;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        Submission::parse(&form.name, &form.phone, &form.message)
    }
}

pub async fn send_contact_email(
    form: web::Form<ContactFormData>,
    mailer: web::Data<dyn Mailer>,
    diagnostics: web::Data<ExposeDiagnostics>,
) -> Result<HttpResponse, InternalError<ContactError>> {
    relay_submission(form.0, mailer.get_ref(), **diagnostics).await
}

pub async fn send_contact_email_multipart(
    form: MultipartForm<ContactMultipartData>,
    mailer: web::Data<dyn Mailer>,
    diagnostics: web::Data<ExposeDiagnostics>,
) -> Result<HttpResponse, InternalError<ContactError>> {
    relay_submission(form.0.into(), mailer.get_ref(), **diagnostics).await
}

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(form, mailer, diagnostics),
    fields(contact_name = %form.name)
)]
async fn relay_submission(
    form: ContactFormData,
    mailer: &dyn Mailer,
    diagnostics: ExposeDiagnostics,
) -> Result<HttpResponse, InternalError<ContactError>> {
    let submission: Submission = form.try_into().map_err(|errors: ValidationErrors| {
        tracing::info!(errors = %errors, "Rejected an invalid submission");
        ContactError::Validation(errors).into_internal(diagnostics)
    })?;

    let email = contact_email(&submission);
    mailer.send(&email).await.map_err(|e| {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to send the contact email"
        );
        ContactError::Transport(e).into_internal(diagnostics)
    })?;

    Ok(HttpResponse::Ok().json(ContactResponse::delivered()))
}

/// Routes `multipart/form-data` bodies to [`send_contact_email_multipart`].
pub fn is_multipart(ctx: &GuardContext<'_>) -> bool {
    ctx.head()
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
        .unwrap_or(false)
}

/// Bodies the urlencoded extractor refuses (wrong content type, too large, malformed)
/// still get a JSON answer.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    unreadable_body(err.to_string())
}

pub fn multipart_error_handler(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    unreadable_body(err.to_string())
}

fn unreadable_body(reason: String) -> actix_web::Error {
    tracing::warn!(error.message = %reason, "Could not decode a contact form body");
    ContactError::Unreadable(reason)
        .into_internal(ExposeDiagnostics(false))
        .into()
}

/// Anything but a POST goes back to the landing page, untouched.
pub async fn redirect_to_landing_page(landing_page: web::Data<LandingPage>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, landing_page.0.as_str()))
        .finish()
}
