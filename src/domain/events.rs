use crate::domain::{LocationSample, Provider, ProviderStatus};
use std::collections::HashMap;

/// Notifications delivered to a location subscription, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationEvent {
    LocationChanged(Option<LocationSample>),
    StatusChanged {
        provider: Provider,
        status: ProviderStatus,
        extras: HashMap<String, String>,
    },
    ProviderEnabled(Provider),
    ProviderDisabled(Provider),
}
