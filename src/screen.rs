use crate::domain::events::LocationEvent;
use crate::domain::{LocationSample, Provider};
use crate::platform::{LocationService, LocationServiceError, Subscription, SubscriptionRequest};
use crate::ui::{Layout, TextField, ViewId};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, trace};

/// Every fix from the GPS provider, without throttling.
pub const LOCATION_UPDATES: SubscriptionRequest = SubscriptionRequest {
    provider: Provider::Gps,
    min_time: Duration::ZERO,
    min_distance_m: 0.0,
};

/// Shows the latest GPS fix in two text fields while active.
#[derive(Debug)]
pub struct LocationDisplayScreen {
    latitude: TextField,
    longitude: TextField,
    subscription: Subscription,
    rx: mpsc::Receiver<LocationEvent>,
}

impl LocationDisplayScreen {
    #[instrument(skip_all)]
    pub async fn activate(layout: &Layout, service: &dyn LocationService, buffer_size: usize) -> Result<Self, ScreenError> {
        debug!("Activating location screen...");
        let latitude = layout.find_view_by_id(ViewId::Latitude).ok_or(ScreenError::MissingView(ViewId::Latitude))?;
        let longitude = layout.find_view_by_id(ViewId::Longitude).ok_or(ScreenError::MissingView(ViewId::Longitude))?;

        let (tx, rx) = mpsc::channel::<LocationEvent>(buffer_size);
        let subscription = service.request_location_updates(LOCATION_UPDATES, tx).await?;
        info!("Activating location screen... OK");

        Ok(LocationDisplayScreen {
            latitude,
            longitude,
            subscription,
            rx,
        })
    }

    pub fn latitude(&self) -> &TextField {
        &self.latitude
    }

    pub fn longitude(&self) -> &TextField {
        &self.longitude
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }

    /// Handles events until the subscription stops delivering them.
    #[instrument(skip(self))]
    pub async fn run(&mut self) {
        while let Some(event) = self.rx.recv().await {
            self.handle(event);
        }
        debug!("Location updates ended");
    }

    pub fn handle(&mut self, event: LocationEvent) {
        trace!("🔵 Received event: {:?}", event);
        match event {
            LocationEvent::LocationChanged(sample) => self.on_location_update(sample),
            LocationEvent::StatusChanged { provider, status, .. } => {
                debug!(%provider, "Provider status changed to {:?}", status);
            }
            LocationEvent::ProviderEnabled(provider) => debug!(%provider, "Provider enabled"),
            LocationEvent::ProviderDisabled(provider) => debug!(%provider, "Provider disabled"),
        }
    }

    pub fn on_location_update(&mut self, sample: Option<LocationSample>) {
        let Some(sample) = sample else {
            return;
        };

        self.latitude.set_text(sample.latitude.to_string());
        self.longitude.set_text(sample.longitude.to_string());
    }

    pub fn deactivate(mut self) {
        self.subscription.cancel();
        info!(
            latitude = %self.latitude.text(),
            longitude = %self.longitude.text(),
            "Deactivated location screen"
        );
    }
}

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("layout has no view '{0}'")]
    MissingView(ViewId),
    #[error("could not subscribe to location updates: {0}")]
    LocationService(#[from] LocationServiceError),
}
