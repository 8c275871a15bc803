use std::fmt;

use bytes::Bytes;
use gig_core::{ListingOrigin, Posting};

/// Events reported back to the host from the engine worker.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ListingLoaded(Result<ListingLoad, FetchError>),
    LogoReady { url: String, logo: Logo },
}

/// Result of the startup load.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingLoad {
    pub origin: ListingOrigin,
    pub postings: Vec<Posting>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoOrigin {
    Remote,
    Fallback,
}

/// Image bytes for a logo, plus whether they came from the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub bytes: Bytes,
    pub origin: LogoOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    NotFound,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
