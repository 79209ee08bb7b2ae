//! The browser side of the contact form, modelled as a state machine.
//!
//! A [`ContactForm`] holds what the visitor typed, the submit control and a transient
//! [`Notice`]. [`ContactClient::submit`] posts the form to the contact endpoint and
//! moves it through `Idle -> Submitting -> Success | Failure -> Idle`.

mod form;
mod notice;
mod submit;

pub use form::{ContactFields, ContactForm, InFlight, SubmissionState, SubmitControl, BUSY_LABEL};
pub use notice::{Notice, NoticeKind, NoticeMessage, NOTICE_DURATION};
pub use submit::{ContactClient, SubmitError, NETWORK_FAILURE};
