use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use peeps_backend::{app, config::Config, state::AppState};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(2).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "peeps_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        cors_allow_origins = ?config.cors_allow_origins,
        contact_inbox = config.contact_inbox.as_deref().unwrap_or("<log only>"),
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        smtp_password = %mask_secret(&config.smtp.password),
        smtp_skip_send = config.smtp.skip_send,
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let state = AppState::from_config(config)?;
    let app = app(state);

    tracing::info!("Contact endpoint listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
