use crate::app_config::AppConfig;
use crate::display_listener::display_listener;
use crate::platform::FeedLocationService;
use crate::screen::LocationDisplayScreen;
use crate::ui::Layout;
use tokio::signal;
use tracing::info;

mod app_config;
mod display_listener;
mod domain;
mod location_sample_deserializer;
mod platform;
mod screen;
mod ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let location_service = match config.feed().path() {
        Some(path) => FeedLocationService::open(path).await?,
        None => FeedLocationService::stdin(),
    };
    info!("✅  Initialized location service: {:?}", location_service);

    let layout = Layout::new(config.display().placeholder());
    let mut screen = LocationDisplayScreen::activate(&layout, &location_service, config.core().event_buffer_size()).await?;

    info!(subscribed = screen.is_subscribed(), "✅  Activated location screen");

    let latitude_rx = screen.latitude().subscribe();
    let longitude_rx = screen.longitude().subscribe();
    let mut stdout = std::io::stdout();
    let display = display_listener(latitude_rx, longitude_rx, &mut stdout);
    tokio::pin!(display);
    info!("✅  Initialized display listener");

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    let mut rendered = None;
    tokio::select! {
        _ = screen.run() => info!("Location updates stopped"),
        _ = signal::ctrl_c() => info!("Received Ctrl-C"),
        result = &mut display => rendered = Some(result),
    }

    screen.deactivate();
    drop(layout);
    match rendered {
        Some(result) => result?,
        None => display.await?,
    }

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}
