//! Error types shared between the panel library and its binary.
//!
//! `PanelError` unifies the failure cases of the page plumbing: URL
//! construction, the HTTP client, signal channels and poisoned region locks.
//! `FetchError` is kept separate: it is the typed outcome of a single quote
//! request, which the page collapses into one "unavailable" message.
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type for the quote panel workspace.
#[derive(Error, Debug)]
pub enum PanelError {
    /// The configured API base URL or a derived endpoint URL is invalid.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `mailto:` or `data:` URLs).
    #[error("URL cannot be a base: {0}")]
    CannotBeABase(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Channel send failed (receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// A region lock was poisoned by a panicking writer.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for PanelError {
    fn from(err: PoisonError<T>) -> Self {
        PanelError::MutexLock(err.to_string())
    }
}

/// Why a quote request produced no quote.
///
/// Every variant is shown to the user as the same lookup-failed message; the
/// distinction exists for logs and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (offline, DNS, refused, reset).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status code.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// A 2xx response whose body is not a quote.
    #[error("undecodable quote body: {0}")]
    Decode(String),
}
