pub mod events;
mod location_sample;
mod provider;

pub use location_sample::LocationSample;
pub use provider::{Provider, ProviderStatus};
