use academy_exams::{
    config::{get_config, init_config},
    routes,
    services::{notification_service::DiscordNotifier, question_bank::QuestionBank},
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    init_config()?;
    let config = get_config();

    let bank = QuestionBank::load(&config.question_bank_path)?;
    if config.discord_webhook_url.is_none() {
        tracing::warn!("DISCORD_WEBHOOK_URL is not set, exam results will not be announced");
    }
    let notifier = Arc::new(DiscordNotifier::new(config.discord_webhook_url.clone()));

    let app_state = AppState::new(bank, notifier, config.default_exam_size);
    let app = routes::router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
