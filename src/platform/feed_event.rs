use crate::domain::events::LocationEvent;
use crate::domain::{LocationSample, Provider, ProviderStatus};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// One line of a location feed.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum FeedEvent {
    LocationChanged {
        sample: Option<LocationSample>,
    },
    StatusChanged {
        provider: Provider,
        status: ProviderStatus,
        #[serde(default)]
        extras: HashMap<String, String>,
    },
    ProviderEnabled {
        provider: Provider,
    },
    ProviderDisabled {
        provider: Provider,
    },
}

impl FeedEvent {
    pub fn parse(line: &str) -> Result<FeedEvent, FeedError> {
        Ok(serde_json::from_str(line.trim())?)
    }
}

impl From<FeedEvent> for LocationEvent {
    fn from(event: FeedEvent) -> Self {
        match event {
            FeedEvent::LocationChanged { sample } => LocationEvent::LocationChanged(sample),
            FeedEvent::StatusChanged { provider, status, extras } => LocationEvent::StatusChanged { provider, status, extras },
            FeedEvent::ProviderEnabled { provider } => LocationEvent::ProviderEnabled(provider),
            FeedEvent::ProviderDisabled { provider } => LocationEvent::ProviderDisabled(provider),
        }
    }
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("malformed feed line: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_location_changed() {
        let event = FeedEvent::parse(r#"{"type":"location_changed","sample":{"latitude":37.7749,"longitude":-122.4194}}"#).unwrap();

        assert_eq!(
            LocationEvent::from(event),
            LocationEvent::LocationChanged(Some(LocationSample::new(37.7749, -122.4194)))
        );
    }

    #[test]
    fn parse_null_sample() {
        let event = FeedEvent::parse(r#"{"type":"location_changed","sample":null}"#).unwrap();

        assert_eq!(LocationEvent::from(event), LocationEvent::LocationChanged(None));
    }

    #[test]
    fn parse_status_changed() {
        let line = r#"  {"type":"status_changed","provider":"gps","status":"available","extras":{"satellites":"7"}}  "#;
        let event = FeedEvent::parse(line).unwrap();

        assert_eq!(
            LocationEvent::from(event),
            LocationEvent::StatusChanged {
                provider: Provider::Gps,
                status: ProviderStatus::Available,
                extras: HashMap::from([("satellites".to_string(), "7".to_string())]),
            }
        );
    }

    #[test]
    fn parse_status_changed_without_extras() {
        let event = FeedEvent::parse(r#"{"type":"status_changed","provider":"network","status":"out_of_service"}"#).unwrap();

        assert_eq!(
            event,
            FeedEvent::StatusChanged {
                provider: Provider::Network,
                status: ProviderStatus::OutOfService,
                extras: HashMap::new(),
            }
        );
    }

    #[test]
    fn parse_provider_toggles() {
        let enabled = FeedEvent::parse(r#"{"type":"provider_enabled","provider":"gps"}"#).unwrap();
        let disabled = FeedEvent::parse(r#"{"type":"provider_disabled","provider":"gps"}"#).unwrap();

        assert_eq!(LocationEvent::from(enabled), LocationEvent::ProviderEnabled(Provider::Gps));
        assert_eq!(LocationEvent::from(disabled), LocationEvent::ProviderDisabled(Provider::Gps));
    }

    #[test]
    fn reject_unknown_event_type() {
        let result = FeedEvent::parse(r#"{"type":"teleported","provider":"gps"}"#);

        assert!(matches!(result, Err(FeedError::Malformed(_))));
    }

    #[test]
    fn reject_invalid_sample() {
        assert!(FeedEvent::parse(r#"{"type":"location_changed","sample":{"latitude":123.0,"longitude":0.0}}"#).is_err());
    }
}
