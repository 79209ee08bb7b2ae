use crate::client::form::{ContactFields, ContactForm, InFlight, SubmissionState};
use crate::domain::ContactResponse;

/// Shown when the endpoint could not be reached or answered with something unreadable.
pub const NETWORK_FAILURE: &str = "An error occurred. Please try again later.";

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("A submission is already in flight for this form")]
    AlreadySubmitting,
}

/// Posts contact forms to the endpoint at `endpoint`.
pub struct ContactClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Runs one submission to completion and returns where it ended up.
    ///
    /// Whatever the outcome, the form is back to `Idle` with its submit control
    /// enabled when this returns.
    #[tracing::instrument(name = "Submitting the contact form", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn submit(&self, form: &mut ContactForm) -> Result<SubmissionState, SubmitError> {
        let mut in_flight = form.begin_submission()?;

        let outcome = match self.post(in_flight.payload()).await {
            Ok(response) => apply_response(&mut in_flight, &response),
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "The contact request did not complete");
                in_flight.fail(NETWORK_FAILURE)
            }
        };

        Ok(outcome)
    }

    async fn post(&self, fields: &ContactFields) -> Result<ContactResponse, reqwest::Error> {
        // Error statuses still carry a JSON body worth reading.
        self.http_client
            .post(&self.endpoint)
            .form(fields)
            .send()
            .await?
            .json::<ContactResponse>()
            .await
    }
}

fn apply_response(in_flight: &mut InFlight<'_>, response: &ContactResponse) -> SubmissionState {
    if response.success {
        return in_flight.succeed(response.message.as_deref().unwrap_or_default());
    }

    match &response.errors {
        Some(errors) => in_flight.fail(&errors.join(", ")),
        None => in_flight.fail(response.message.as_deref().unwrap_or_default()),
    }
}
