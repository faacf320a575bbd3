use sconce::adapter::Adapter;
use sconce::app_config::AppConfig;
use sconce::domain::events::Event;
use sconce::event_listener::event_listener;
use sconce::keylight::{self, KeyLightController};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::{signal, task};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load());
    info!("✅  Loaded configuration");

    let client = keylight::new_client()?;

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    task::spawn(async move {
        event_listener(rx).await;
    });
    info!("✅  Initialized event listener");

    let controller = Arc::new(KeyLightController::new(client, config));
    let _adapter = Adapter::new(controller, tx).await;
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    signal::ctrl_c().await?;
    info!("Shutting down");

    Ok(())
}
