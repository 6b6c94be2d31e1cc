use super::types::{FormSubmission, SubmissionFailure};
use crate::api::ApiClient;
use std::rc::Rc;

#[derive(Clone)]
pub struct ContactRepository {
    client: Rc<ApiClient>,
}

impl ContactRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, submission: FormSubmission) -> Result<(), SubmissionFailure> {
        log::info!("sending contact submission");
        match self.client.submit_contact(&submission.into()).await {
            Ok(_) => {
                log::info!("contact submission accepted");
                Ok(())
            }
            Err(err) => {
                log::warn!(
                    "contact submission failed: code={} error={} details={:?}",
                    err.code,
                    err.error,
                    err.details
                );
                Err(err.into())
            }
        }
    }
}
