use std::io::Write;
use tokio::sync::watch::Receiver;
use tracing::{debug, info, instrument};

pub fn render(latitude: &str, longitude: &str) -> String {
    format!("Latitude: {}  Longitude: {}", latitude, longitude)
}

/// Renders both fields whenever either changes, until both fields are gone.
///
/// Poll this on the same task as the screen so a sample is never rendered half applied.
#[instrument(skip_all)]
pub async fn display_listener<W: Write>(mut latitude_rx: Receiver<String>, mut longitude_rx: Receiver<String>, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", render(&latitude_rx.borrow_and_update(), &longitude_rx.borrow_and_update()))?;

    let mut latitude_open = true;
    let mut longitude_open = true;
    while latitude_open || longitude_open {
        let changed = tokio::select! {
            changed = latitude_rx.changed(), if latitude_open => {
                latitude_open = changed.is_ok();
                latitude_open
            }
            changed = longitude_rx.changed(), if longitude_open => {
                longitude_open = changed.is_ok();
                longitude_open
            }
            else => false,
        };
        if !changed {
            continue;
        }

        let line = render(&latitude_rx.borrow_and_update(), &longitude_rx.borrow_and_update());
        info!("📍 {}", line);
        writeln!(out, "{}", line)?;
    }

    debug!("Display fields dropped");
    Ok(())
}
