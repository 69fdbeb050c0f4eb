//! Error types for livestream status fetching.

use thiserror::Error;

/// Errors that can occur during a livestream-status fetch.
///
/// Every variant is terminal for the call that produced it; the client never
/// retries internally. Retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum LivestreamError {
    /// Transport failure or a response body that did not decode as the
    /// expected JSON envelope.
    #[error("Decode error: {reason}")]
    Decode {
        /// The underlying transport or parse failure
        reason: String,
    },

    /// The server reported an application-level error with a diagnostic trace.
    #[error("Remote error: {message}\n---Trace---\n{}", .trace.join("\n"))]
    Remote {
        /// Server-reported error message
        message: String,
        /// Server-reported diagnostic trace lines
        trace: Vec<String>,
    },

    /// The envelope was well-formed JSON but matched neither the
    /// success-with-data nor the error-with-trace shape.
    #[error("Unhandled status envelope shape")]
    UnhandledEnvelope,

    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout {
        /// The endpoint that timed out
        url: String,
    },

    /// The caller cancelled the request before it completed.
    #[error("Request cancelled by caller")]
    Cancelled,
}
