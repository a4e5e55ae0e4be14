use crate::domain::LocationSample;
use crate::domain::events::LocationEvent;
use crate::platform::SubscriptionRequest;
use std::time::Instant;

/// Decides which feed events reach a subscriber, honouring the request's provider and throttling.
#[derive(Debug)]
pub(super) struct DeliveryFilter {
    request: SubscriptionRequest,
    last_delivered: Option<(Instant, LocationSample)>,
}

impl DeliveryFilter {
    pub fn new(request: SubscriptionRequest) -> Self {
        DeliveryFilter {
            request,
            last_delivered: None,
        }
    }

    pub fn admit(&mut self, event: &LocationEvent, now: Instant) -> bool {
        match event {
            LocationEvent::LocationChanged(Some(sample)) => {
                if let Some((at, previous)) = &self.last_delivered {
                    if now.saturating_duration_since(*at) < self.request.min_time {
                        return false;
                    }
                    if previous.distance_to(sample) < self.request.min_distance_m {
                        return false;
                    }
                }
                self.last_delivered = Some((now, *sample));
                true
            }
            LocationEvent::LocationChanged(None) => true,
            LocationEvent::StatusChanged { provider, .. } => *provider == self.request.provider,
            LocationEvent::ProviderEnabled(provider) | LocationEvent::ProviderDisabled(provider) => *provider == self.request.provider,
        }
    }
}
