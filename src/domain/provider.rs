use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// A named source of location fixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gps,
    Network,
    Passive,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gps => "gps",
            Provider::Network => "network",
            Provider::Passive => "passive",
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderStatus {
    OutOfService,
    TemporarilyUnavailable,
    Available,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\"gps\"", Provider::Gps)]
    #[case("\"network\"", Provider::Network)]
    #[case("\"passive\"", Provider::Passive)]
    fn deserialize_provider(#[case] json: &str, #[case] expected: Provider) {
        let provider: Provider = serde_json::from_str(json).unwrap();

        assert_eq!(provider, expected);
        assert_eq!(format!("\"{}\"", provider), json);
    }

    #[test]
    fn deserialize_status() {
        let status: ProviderStatus = serde_json::from_str("\"temporarily_unavailable\"").unwrap();

        assert_eq!(status, ProviderStatus::TemporarilyUnavailable);
    }
}
