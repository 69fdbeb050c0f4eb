//! Odysee Live - Livestream status client

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Issues a single GET against the livestream-status endpoint, decodes the
//! success/error envelope, and reshapes the live streams into a lookup table
//! keyed by active claim id, ready for decorating content listings with
//! "LIVE" badges and viewer counts.

pub mod client;
pub mod config;
pub mod error;
pub mod status;

// Re-export main types
pub use client::LivestreamClient;
pub use config::LiveApiConfig;
pub use error::LivestreamError;
pub use status::{LivestreamInfo, LivestreamMap, live_entries_for};

/// Convenience type alias for Results with LivestreamError.
pub type Result<T> = std::result::Result<T, LivestreamError>;
