use std::sync::Arc;

use crate::{
    config::Config,
    services::{ContactNotifier, EmailNotifier, LogNotifier},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub notifier: Arc<dyn ContactNotifier>,
}

impl AppState {
    pub fn new(config: Config, notifier: Arc<dyn ContactNotifier>) -> Self {
        Self { config, notifier }
    }

    /// Email forwarding when `CONTACT_INBOX` is configured, log-only otherwise.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let notifier: Arc<dyn ContactNotifier> = match &config.contact_inbox {
            Some(inbox) => Arc::new(EmailNotifier::new(&config.smtp, inbox)?),
            None => Arc::new(LogNotifier),
        };
        Ok(Self::new(config, notifier))
    }
}
