//! HTTP client for the livestream-status endpoint.

use std::future::Future;

use crate::config::LiveApiConfig;
use crate::error::LivestreamError;
use crate::status::{LivestreamMap, StatusEnvelope};

/// Client for the livestream-status API.
///
/// Holds a connection-pooled HTTP client, so it is cheap to clone and share.
/// Each call issues exactly one GET and allocates a fresh result map;
/// concurrent calls do not interact.
#[derive(Debug, Clone)]
pub struct LivestreamClient {
    client: reqwest::Client,
    config: LiveApiConfig,
}

impl LivestreamClient {
    /// Creates a client from the given configuration.
    ///
    /// The request timeout and user agent are fixed on the underlying HTTP
    /// client at construction.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be constructed, which only happens
    /// when the TLS backend fails to initialize.
    pub fn new(config: LiveApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .expect("HTTP client creation should not fail");

        Self { client, config }
    }

    /// Fetches the status of all currently active livestreams.
    ///
    /// Returns a lookup table from active claim id to live-status metadata.
    /// Streams whose claim is still confirming on-chain are excluded. The
    /// response body is decoded regardless of HTTP status, since the server
    /// delivers its error envelope on non-success statuses too.
    ///
    /// # Errors
    /// - `LivestreamError::Decode` - Transport failure or malformed body
    /// - `LivestreamError::Remote` - Server-reported error with trace
    /// - `LivestreamError::UnhandledEnvelope` - Unrecognized envelope shape
    /// - `LivestreamError::Timeout` - Request exceeded the configured timeout
    pub async fn list_livestreams(&self) -> Result<LivestreamMap, LivestreamError> {
        let url = self.config.endpoint.as_str();
        tracing::debug!("Fetching livestream status from {url}");

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Livestream status request to {url} failed: {e}");

            if e.is_timeout() {
                LivestreamError::Timeout {
                    url: url.to_string(),
                }
            } else {
                LivestreamError::Decode {
                    reason: format!("request failed: {e}"),
                }
            }
        })?;

        let envelope: StatusEnvelope = response.json().await.map_err(|e| {
            tracing::warn!("Livestream status response from {url} did not decode: {e}");

            if e.is_timeout() {
                LivestreamError::Timeout {
                    url: url.to_string(),
                }
            } else {
                LivestreamError::Decode {
                    reason: format!("invalid status envelope: {e}"),
                }
            }
        })?;

        let map = envelope.into_map().inspect_err(|e| {
            tracing::warn!("Livestream status from {url} not usable: {e}");
        })?;

        tracing::debug!("Livestream status: {} streams live", map.len());
        Ok(map)
    }

    /// Fetches livestream status, aborting when `cancel` completes first.
    ///
    /// Dropping the in-flight request aborts it; no response is consumed
    /// after cancellation.
    ///
    /// # Errors
    /// Everything [`list_livestreams`](Self::list_livestreams) surfaces, plus
    /// `LivestreamError::Cancelled` when the cancel future wins the race.
    pub async fn list_livestreams_with_cancel(
        &self,
        cancel: impl Future<Output = ()>,
    ) -> Result<LivestreamMap, LivestreamError> {
        tokio::select! {
            result = self.list_livestreams() => result,
            () = cancel => {
                tracing::debug!("Livestream status fetch cancelled by caller");
                Err(LivestreamError::Cancelled)
            }
        }
    }
}

impl Default for LivestreamClient {
    fn default() -> Self {
        Self::new(LiveApiConfig::default())
    }
}
