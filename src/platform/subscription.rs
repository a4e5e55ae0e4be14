use crate::platform::SubscriptionRequest;
use tokio::sync::oneshot;
use tracing::debug;

/// Handle to an active location subscription. Updates stop once it is cancelled or dropped.
#[derive(Debug)]
pub struct Subscription {
    request: SubscriptionRequest,
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl Subscription {
    pub fn new(request: SubscriptionRequest, cancel_tx: oneshot::Sender<()>) -> Self {
        Subscription {
            request,
            cancel_tx: Some(cancel_tx),
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel_tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            debug!(provider = %self.request.provider, "Removing location updates...");
            // The provider may already have stopped on its own
            cancel_tx.send(()).unwrap_or_default();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Provider;
    use std::time::Duration;

    fn request() -> SubscriptionRequest {
        SubscriptionRequest {
            provider: Provider::Gps,
            min_time: Duration::ZERO,
            min_distance_m: 0.0,
        }
    }

    #[test]
    fn cancel_signals_the_provider() {
        let (tx, mut rx) = oneshot::channel();
        let mut subscription = Subscription::new(request(), tx);
        assert!(subscription.is_active());

        subscription.cancel();

        assert!(!subscription.is_active());
        assert_eq!(rx.try_recv(), Ok(()));
    }

    #[test]
    fn cancel_twice_is_harmless() {
        let (tx, _rx) = oneshot::channel();
        let mut subscription = Subscription::new(request(), tx);

        subscription.cancel();
        subscription.cancel();

        assert!(!subscription.is_active());
    }

    #[test]
    fn drop_cancels() {
        let (tx, mut rx) = oneshot::channel();
        drop(Subscription::new(request(), tx));

        assert_eq!(rx.try_recv(), Ok(()));
    }

    #[test]
    fn is_inactive_once_the_provider_stopped() {
        let (tx, rx) = oneshot::channel();
        let subscription = Subscription::new(request(), tx);

        drop(rx);

        assert!(!subscription.is_active());
    }
}
