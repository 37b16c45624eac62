//! Fetch module for robots.txt retrieval
//!
//! This module contains the network half of robots.txt evaluation:
//! - The [`HttpFetcher`] seam and its reqwest implementation
//! - Transport error classification
//! - Mapping of HTTP outcomes to access decisions ([`classify`])

mod client;
mod outcome;

pub use client::{
    build_http_client, FetchResult, HttpFetcher, ReqwestFetcher, TransportError,
    TransportErrorKind,
};
pub use outcome::{classify, FetchOutcome};
