use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
    /// `SMTP_SKIP_SEND=true` builds messages but never hands them to the relay.
    pub skip_send: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub cors_allow_origins: Vec<String>,
    /// Mailbox that receives contact submissions; `None` logs them instead.
    pub contact_inbox: Option<String>,
    pub smtp: SmtpConfig,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr_raw = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_addr_raw))?;

        let cors_allow_origins = parse_origins(
            &env::var("CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "http://localhost:8000".to_string()),
        );

        let contact_inbox = env::var("CONTACT_INBOX")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let smtp = SmtpConfig {
            host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .unwrap_or(587),
            username: env::var("SMTP_USERNAME").unwrap_or_default(),
            password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_address: env::var("SMTP_FROM_ADDRESS")
                .unwrap_or_else(|_| "noreply@campuscircle.local".to_string()),
            skip_send: env::var("SMTP_SKIP_SEND").unwrap_or_default() == "true",
        };

        Ok(Config {
            bind_addr,
            cors_allow_origins,
            contact_inbox,
            smtp,
        })
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
