use surveyor::app_config::AppConfig;
use surveyor::console_listen;
use surveyor::domain::events::Event;
use surveyor::measurement::MeasurementSession;
use surveyor::store::Store;
use surveyor::store_listener::store_listener;
use tokio::sync::mpsc;
use tokio::{io, task};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    // Logs go to stderr, stdout carries the rendered views
    tracing_subscriber::fmt()
        .with_max_level(config.core().log_level())
        .with_writer(std::io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!(center = %config.map().center(), "✅  Loaded configuration");

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let mut store = Store::new(rx, MeasurementSession::new(config.map().center()));
    let notifier_rx = store.notifier();

    let output_format = config.output().format();
    let view_listener = task::spawn(async move {
        store_listener(notifier_rx, output_format).await;
    });
    info!("✅  Initialized view listener");

    let store_task = task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    console_listen::listen(io::stdin(), tx).await?;

    // Dropping the sender stops the store, which in turn stops the view listener
    store_task.await?;
    view_listener.await?;

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}
