/// Single-shot retrieval of the live stream list
use crate::channel::{ChannelRecord, StreamsPayload};
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::snapshot::StreamListSnapshot;
use std::cell::Cell;

/// Something that can GET a URL and hand back the body as text
#[allow(async_fn_in_trait)]
pub trait StreamSource {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Parse a streams body, accepting either known payload shape
pub fn decode_channels(body: &str) -> Result<Vec<ChannelRecord>, FetchError> {
    let payload: StreamsPayload = serde_json::from_str(body)?;
    Ok(payload.into_channels())
}

pub struct StreamerFetcher {
    config: ApiConfig,
    in_flight: Cell<bool>,
}

impl StreamerFetcher {
    pub fn new(config: ApiConfig) -> Self {
        StreamerFetcher {
            config,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Fetch, decode and build a fresh snapshot.
    ///
    /// Only one request runs at a time; a call made while another is pending
    /// fails with [`FetchError::InFlight`]. No retries, no timeout.
    pub async fn fetch<S: StreamSource>(&self, source: &S) -> Result<StreamListSnapshot, FetchError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let url = self.config.streams_url();
        log::debug!("Requesting streams from {}", url);

        let body = source.get_text(&url).await?;
        let channels = decode_channels(&body)?;
        let total = channels.len();
        let snapshot = StreamListSnapshot::build(channels);

        log::info!("Loaded {} streams ({} hidden by blacklist)", snapshot.len(), total - snapshot.len());
        Ok(snapshot)
    }
}

struct InFlightGuard<'a>(&'a Cell<bool>);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Result<Self, FetchError> {
        if flag.replace(true) {
            return Err(FetchError::InFlight);
        }
        Ok(InFlightGuard(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
