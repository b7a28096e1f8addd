//! Backend gateway
//!
//! All backend traffic goes through here: the one-shot forecast fetch and
//! the push channel that redelivers the forecast on a fixed schedule. The
//! rest of the app never sees a URL or an HTTP status; it gets decoded
//! entries or an error string.

use std::time::Duration;

use stratus_core::ForecastEntry;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum GatewayError {
    Request(reqwest::Error),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Request(e) => write!(f, "forecast request failed: {}", e),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Request(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Request(e)
    }
}

#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/forecast", self.base_url.trim_end_matches('/'))
    }

    /// Fetch the current forecast once.
    ///
    /// A non-2xx status is an error; entry order is whatever the backend
    /// sent.
    pub async fn fetch_forecast(&self) -> Result<Vec<ForecastEntry>, GatewayError> {
        let url = self.endpoint();
        debug!(%url, "fetching forecast");

        let entries = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ForecastEntry>>()
            .await?;

        debug!(count = entries.len(), "forecast fetched");
        Ok(entries)
    }

    /// Open the push channel: a stream of unsolicited forecast deliveries.
    ///
    /// Each delivery is a full forecast, same shape as a pull. A failed
    /// delivery is logged and skipped; the schedule keeps going. The
    /// producer task stops when the stream is dropped.
    pub fn refresh_stream(&self, every: Duration) -> ReceiverStream<Vec<ForecastEntry>> {
        let (tx, rx) = mpsc::channel(1);
        let gateway = self.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            // Skip the first immediate tick; the initial fetch is the
            // shell's job.
            interval.tick().await;

            loop {
                interval.tick().await;
                match gateway.fetch_forecast().await {
                    Ok(entries) => {
                        if tx.send(entries).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "refresh push skipped");
                    }
                }
            }
        });

        ReceiverStream::new(rx)
    }
}
