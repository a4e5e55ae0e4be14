use crate::domain::Provider;
use crate::domain::events::LocationEvent;
use crate::platform::delivery_filter::DeliveryFilter;
use crate::platform::feed_event::FeedEvent;
use crate::platform::{LocationService, LocationServiceError, Subscription, SubscriptionRequest};
use async_trait::async_trait;
use std::fmt::{Debug, Formatter};
use std::io::BufRead;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, Sender};
use tokio::sync::{Mutex, oneshot};
use tokio_stream::wrappers::{LinesStream, ReceiverStream};
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, error, info, instrument, trace, warn};

type FeedLines = Box<dyn Stream<Item = std::io::Result<String>> + Send + Unpin>;

const READER_BUFFER_SIZE: usize = 16;

/// A location service backed by newline-delimited JSON events, one per line.
///
/// A feed can be consumed once, so the service serves a single subscription.
pub struct FeedLocationService {
    provider: Provider,
    lines: Mutex<Option<FeedLines>>,
}

impl FeedLocationService {
    pub fn new<R>(provider: Provider, reader: R) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        Self::from_lines(provider, LinesStream::new(reader.lines()))
    }

    pub fn from_lines<S>(provider: Provider, lines: S) -> Self
    where
        S: Stream<Item = std::io::Result<String>> + Send + Unpin + 'static,
    {
        FeedLocationService {
            provider,
            lines: Mutex::new(Some(Box::new(lines))),
        }
    }

    /// Reads stdin on its own thread, so a pending read never holds up runtime shutdown.
    pub fn stdin() -> Self {
        Self::from_lines(Provider::Gps, spawn_line_reader(std::io::BufReader::new(std::io::stdin())))
    }

    pub async fn open(path: impl AsRef<Path>) -> Result<Self, LocationServiceError> {
        let file = File::open(path.as_ref()).await?;
        debug!(path = %path.as_ref().display(), "Opened location feed");
        Ok(Self::new(Provider::Gps, BufReader::new(file)))
    }
}

/// Forwards lines from a blocking reader through a channel. The thread stops at end of input
/// or once the stream is dropped and the next line arrives.
fn spawn_line_reader<R>(reader: R) -> ReceiverStream<std::io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(READER_BUFFER_SIZE);
    std::thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                return;
            }
        }
    });
    ReceiverStream::new(rx)
}

impl Debug for FeedLocationService {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedLocationService").field("provider", &self.provider).finish_non_exhaustive()
    }
}

#[async_trait]
impl LocationService for FeedLocationService {
    #[instrument(skip(self, listener))]
    async fn request_location_updates(
        &self,
        request: SubscriptionRequest,
        listener: Sender<LocationEvent>,
    ) -> Result<Subscription, LocationServiceError> {
        if request.provider != self.provider {
            return Err(LocationServiceError::UnsupportedProvider(request.provider));
        }

        let Some(lines) = self.lines.lock().await.take() else {
            return Err(LocationServiceError::AlreadySubscribed);
        };

        let (cancel_tx, cancel_rx) = oneshot::channel();
        tokio::spawn(forward(lines, request, listener, cancel_rx));
        info!(provider = %request.provider, "📡 Requested location updates");

        Ok(Subscription::new(request, cancel_tx))
    }
}

#[instrument(skip_all, fields(provider = %request.provider))]
async fn forward(mut lines: FeedLines, request: SubscriptionRequest, listener: Sender<LocationEvent>, mut cancel_rx: oneshot::Receiver<()>) {
    let mut filter = DeliveryFilter::new(request);

    loop {
        let line = tokio::select! {
            biased;
            _ = &mut cancel_rx => {
                debug!("Subscription cancelled, stopping location updates");
                return;
            }
            line = lines.next() => line,
        };

        let line = match line {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!("❌ Could not read location feed: {}", e);
                return;
            }
            None => {
                info!("🔴 Location feed ended");
                return;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let event: LocationEvent = match FeedEvent::parse(&line) {
            Ok(event) => event.into(),
            Err(e) => {
                warn!(line = line.trim(), "⚠️ Skipping feed line: {}", e);
                continue;
            }
        };

        if !filter.admit(&event, Instant::now()) {
            trace!("Filtered event: {:?}", event);
            continue;
        }

        if listener.send(event).await.is_err() {
            debug!("Listener is gone, stopping location updates");
            return;
        }
    }
}
