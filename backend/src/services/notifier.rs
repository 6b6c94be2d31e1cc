use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::{config::SmtpConfig, models::contact::ReceivedContact};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Destination for accepted contact submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, contact: &ReceivedContact) -> Result<(), NotifyError>;
}

/// Records submissions in the application log only.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl ContactNotifier for LogNotifier {
    async fn notify(&self, contact: &ReceivedContact) -> Result<(), NotifyError> {
        tracing::info!(
            request_id = contact.request_id.as_deref().unwrap_or("-"),
            name = %contact.submission.name,
            email = %contact.submission.email,
            message_len = contact.submission.message.len(),
            "contact submission received"
        );
        Ok(())
    }
}

pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: Mailbox,
    inbox: Mailbox,
    skip_send: bool,
}

impl EmailNotifier {
    pub fn new(smtp: &SmtpConfig, inbox: &str) -> Result<Self, NotifyError> {
        let mailer = if smtp.username.is_empty() {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
                .port(smtp.port)
                .build()
        } else {
            let creds = Credentials::new(smtp.username.clone(), smtp.password.clone());
            AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
                .port(smtp.port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from_address: smtp.from_address.parse()?,
            inbox: inbox.parse()?,
            skip_send: smtp.skip_send,
        })
    }

    pub fn build_message(&self, contact: &ReceivedContact) -> Result<Message, NotifyError> {
        let submission = &contact.submission;
        let reply_to: Mailbox = submission.email.parse()?;
        let body = format!(
            "New contact form submission\n\nName: {}\nEmail: {}\nReceived: {}\nRequest: {}\n\n{}\n",
            submission.name,
            submission.email,
            contact.received_at.format("%Y-%m-%d %H:%M:%S UTC"),
            contact.request_id.as_deref().unwrap_or("-"),
            submission.message
        );

        Ok(Message::builder()
            .from(self.from_address.clone())
            .reply_to(reply_to)
            .to(self.inbox.clone())
            .subject(format!("Contact form: {}", submission.name))
            .header(ContentType::TEXT_PLAIN)
            .body(body)?)
    }
}

#[async_trait]
impl ContactNotifier for EmailNotifier {
    async fn notify(&self, contact: &ReceivedContact) -> Result<(), NotifyError> {
        let email = self.build_message(contact)?;
        if self.skip_send {
            tracing::debug!("SMTP_SKIP_SEND set; contact email not delivered");
            return Ok(());
        }
        self.mailer.send(email).await?;
        tracing::info!(
            request_id = contact.request_id.as_deref().unwrap_or("-"),
            "contact submission forwarded by email"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::ContactSubmission;

    fn smtp_config() -> SmtpConfig {
        SmtpConfig {
            host: "localhost".into(),
            port: 2525,
            username: String::new(),
            password: String::new(),
            from_address: "noreply@campuscircle.local".into(),
            skip_send: true,
        }
    }

    fn received(email: &str) -> ReceivedContact {
        ReceivedContact {
            request_id: Some("req-1".into()),
            received_at: chrono::Utc::now(),
            submission: ContactSubmission {
                name: "Ada".into(),
                email: email.into(),
                message: "Hello there".into(),
            },
        }
    }

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        assert!(LogNotifier.notify(&received("ada@example.com")).await.is_ok());
    }

    // lettre's pooled transport must be dropped inside a Tokio runtime.
    #[tokio::test]
    async fn email_notifier_rejects_invalid_inbox() {
        assert!(matches!(
            EmailNotifier::new(&smtp_config(), "not an address"),
            Err(NotifyError::Address(_))
        ));
    }

    #[tokio::test]
    async fn email_message_carries_submission_and_reply_to() {
        let notifier = EmailNotifier::new(&smtp_config(), "team@campuscircle.local").unwrap();
        let message = notifier.build_message(&received("ada@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Contact form: Ada"));
        assert!(raw.contains("Reply-To: ada@example.com"));
        assert!(raw.contains("To: team@campuscircle.local"));
        assert!(raw.contains("Hello there"));
    }

    #[tokio::test]
    async fn email_notifier_skips_delivery_when_configured() {
        let notifier = EmailNotifier::new(&smtp_config(), "team@campuscircle.local").unwrap();
        assert!(notifier.notify(&received("ada@example.com")).await.is_ok());
    }
}
