use crate::api::{ApiError, ContactRequest};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thanks! Your message is on its way.";
pub const FAILURE_MESSAGE: &str = "Something went wrong sending your message. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormSubmission {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

impl From<FormSubmission> for ContactRequest {
    fn from(value: FormSubmission) -> Self {
        ContactRequest {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Either the endpoint was never reached or it answered outside the 2xx range.
/// Both surface to the user as the same generic failure.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmissionFailure {
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),
    #[error("contact endpoint rejected the submission: {0}")]
    Rejected(ApiError),
}

impl From<ApiError> for SubmissionFailure {
    fn from(error: ApiError) -> Self {
        if error.is_transport() {
            SubmissionFailure::Transport(error.error)
        } else {
            SubmissionFailure::Rejected(error)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    fields: FormSubmission,
    status: SubmissionStatus,
    last_failure: Option<SubmissionFailure>,
}

impl ContactFormState {
    pub fn fields(&self) -> &FormSubmission {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn last_failure(&self) -> Option<&SubmissionFailure> {
        self.last_failure.as_ref()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Message => &self.fields.message,
        }
    }

    /// Edits never change the status.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    /// Moves to `Submitting` and hands back the payload to send, or `None`
    /// when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormSubmission> {
        if !self.can_submit() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.last_failure = None;
        Some(self.fields.clone())
    }

    pub fn finish(&mut self, outcome: Result<(), SubmissionFailure>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = FormSubmission::default();
                self.status = SubmissionStatus::Success;
            }
            Err(failure) => {
                self.status = SubmissionStatus::Error;
                self.last_failure = Some(failure);
            }
        }
    }

    pub fn feedback(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Success => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Error => Some(FAILURE_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}
