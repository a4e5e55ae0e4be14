use crate::domain::Provider;
use crate::domain::events::LocationEvent;
use crate::platform::Subscription;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::Sender;

/// What a subscriber asks of a provider. A zero `min_time` or `min_distance_m` disables that filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubscriptionRequest {
    pub provider: Provider,
    pub min_time: Duration,
    pub min_distance_m: f64,
}

#[async_trait]
pub trait LocationService: Debug + Send + Sync {
    /// Delivers events from `request.provider` to `listener` until the returned subscription is cancelled.
    async fn request_location_updates(
        &self,
        request: SubscriptionRequest,
        listener: Sender<LocationEvent>,
    ) -> Result<Subscription, LocationServiceError>;
}

#[derive(Error, Debug)]
pub enum LocationServiceError {
    #[error("provider '{0}' is not supported by this location service")]
    UnsupportedProvider(Provider),
    #[error("location service already serves a subscription")]
    AlreadySubscribed,
    #[error("location feed could not be opened: {0}")]
    Io(#[from] std::io::Error),
}
