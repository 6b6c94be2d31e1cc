use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppError,
    middleware::RequestId,
    models::contact::{ContactSubmission, MessageResponse, ReceivedContact},
    state::AppState,
};

pub const ACCEPTED_MESSAGE: &str = "Thanks! We'll be in touch soon.";

pub async fn submit_contact(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected contact payload");
        AppError::BadRequest(rejection.body_text())
    })?;

    let submission = payload.normalized();
    submission.validate()?;

    let contact = ReceivedContact {
        request_id: request_id.map(|Extension(RequestId(id))| id),
        received_at: Utc::now(),
        submission,
    };

    state.notifier.notify(&contact).await?;

    Ok(Json(MessageResponse {
        message: ACCEPTED_MESSAGE.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Config, SmtpConfig},
        services::notifier::{MockContactNotifier, NotifyError},
    };
    use std::sync::Arc;

    fn config() -> Config {
        Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            cors_allow_origins: vec![],
            contact_inbox: None,
            smtp: SmtpConfig {
                host: "localhost".into(),
                port: 2525,
                username: String::new(),
                password: String::new(),
                from_address: "noreply@campuscircle.local".into(),
                skip_send: true,
            },
        }
    }

    fn payload(name: &str, email: &str, message: &str) -> Result<Json<ContactSubmission>, JsonRejection> {
        Ok(Json(ContactSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }))
    }

    #[tokio::test]
    async fn accepted_submission_is_trimmed_and_forwarded_once() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_notify()
            .withf(|contact| {
                contact.submission.name == "Ada"
                    && contact.submission.email == "ada@example.com"
                    && contact.request_id.as_deref() == Some("req-7")
            })
            .times(1)
            .returning(|_| Ok(()));
        let state = AppState::new(config(), Arc::new(notifier));

        let Json(body) = submit_contact(
            State(state),
            Some(Extension(RequestId("req-7".into()))),
            payload(" Ada ", " ada@example.com", "Hello"),
        )
        .await
        .expect("accepted");
        assert_eq!(body.message, ACCEPTED_MESSAGE);
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_notifier() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_notify().times(0);
        let state = AppState::new(config(), Arc::new(notifier));

        let err = submit_contact(State(state), None, payload("", "nope", "Hello"))
            .await
            .unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.starts_with("name:")));
                assert!(errors.iter().any(|e| e.starts_with("email:")));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn notifier_failure_maps_to_internal_error() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_notify().returning(|_| {
            Err(NotifyError::Address(
                "bad".parse::<lettre::Address>().unwrap_err(),
            ))
        });
        let state = AppState::new(config(), Arc::new(notifier));

        let err = submit_contact(State(state), None, payload("Ada", "ada@example.com", "Hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InternalServerError(_)));
    }
}
