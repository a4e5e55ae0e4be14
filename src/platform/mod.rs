mod delivery_filter;
mod feed;
mod feed_event;
mod location_service;
mod subscription;

pub use feed::FeedLocationService;
pub use location_service::{LocationService, LocationServiceError, SubscriptionRequest};
pub use subscription::Subscription;
