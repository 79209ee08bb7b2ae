use crate::client::notice::{Notice, NoticeKind};
use crate::client::submit::SubmitError;

/// Label the submit control shows while a request is in flight.
pub const BUSY_LABEL: &str = "Sending...";

/// The three inputs of the form, posted as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    disabled: bool,
}

impl SubmitControl {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub notice: Notice,
    submit: SubmitControl,
    state: SubmissionState,
}

impl ContactForm {
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            notice: Notice::default(),
            submit: SubmitControl {
                label: submit_label.into(),
                disabled: false,
            },
            state: SubmissionState::Idle,
        }
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Disables the submit control and swaps its label for [`BUSY_LABEL`] until the
    /// returned guard is dropped.
    pub fn begin_submission(&mut self) -> Result<InFlight<'_>, SubmitError> {
        if self.submit.disabled {
            return Err(SubmitError::AlreadySubmitting);
        }

        let original_label = std::mem::replace(&mut self.submit.label, BUSY_LABEL.into());
        self.submit.disabled = true;
        self.state = SubmissionState::Submitting;

        Ok(InFlight {
            form: self,
            original_label,
        })
    }
}

/// A submission in flight.
///
/// Dropping it re-enables the submit control, restores its label and returns the
/// form to `Idle`, on every exit path.
#[derive(Debug)]
pub struct InFlight<'a> {
    form: &'a mut ContactForm,
    original_label: String,
}

impl InFlight<'_> {
    pub fn form(&self) -> &ContactForm {
        &*self.form
    }

    pub fn payload(&self) -> &ContactFields {
        &self.form.fields
    }

    /// Shows the confirmation and clears the inputs.
    pub fn succeed(&mut self, message: &str) -> SubmissionState {
        self.form
            .notice
            .show(format!("✅ {}", message), NoticeKind::Success);
        self.form.fields.clear();
        self.form.state = SubmissionState::Success;
        self.form.state
    }

    /// Shows the error and leaves the inputs alone so the visitor can fix them.
    pub fn fail(&mut self, message: &str) -> SubmissionState {
        self.form
            .notice
            .show(format!("❌ {}", message), NoticeKind::Error);
        self.form.state = SubmissionState::Failure;
        self.form.state
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.form.submit.label = std::mem::take(&mut self.original_label);
        self.form.submit.disabled = false;
        self.form.state = SubmissionState::Idle;
    }
}
