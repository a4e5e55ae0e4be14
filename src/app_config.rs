use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    display: Display,
    #[serde(default)]
    feed: Feed,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GEOLOCATION").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size.max(1)
    }
}

#[derive(Debug, Deserialize)]
pub struct Display {
    placeholder: String,
}

impl Display {
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

/// Where location events are read from, stdin when no path is set.
#[derive(Debug, Default, Deserialize)]
pub struct Feed {
    path: Option<String>,
}

impl Feed {
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref().filter(|path| !path.is_empty())
    }
}
