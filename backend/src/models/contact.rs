use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::rules::validate_not_blank;

pub const NAME_MAX_LEN: u64 = 200;
pub const EMAIL_MAX_LEN: u64 = 320;
pub const MESSAGE_MAX_LEN: u64 = 5000;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ContactSubmission {
    #[validate(custom(function = "validate_not_blank"), length(max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email, length(max = EMAIL_MAX_LEN))]
    pub email: String,
    #[validate(custom(function = "validate_not_blank"), length(max = MESSAGE_MAX_LEN))]
    pub message: String,
}

impl ContactSubmission {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// A submission accepted by the endpoint, as handed to a notifier.
#[derive(Debug, Clone, Serialize)]
pub struct ReceivedContact {
    pub request_id: Option<String>,
    pub received_at: DateTime<Utc>,
    pub submission: ContactSubmission,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
