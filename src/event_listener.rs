use crate::domain::events::Event;
use tokio::sync::mpsc::Receiver;
use tracing::{info, instrument};

/// Logs the notifications a gateway host would consume.
#[instrument(skip_all)]
pub async fn event_listener(mut rx: Receiver<Event>) {
    while let Some(event) = rx.recv().await {
        match event {
            Event::DeviceAdded { device_id } => {
                info!(device_id, "🔵 Device added");
            }
            Event::DeviceRemoved { device_id } => {
                info!(device_id, "🔵 Device removed");
            }
            Event::PropertyChanged {
                device_id,
                property_id,
                value,
            } => {
                info!(device_id, "🔵 Property '{}' changed to '{}'", property_id, value);
            }
        }
    }
}
