//! Robots-Checker: robots.txt retrieval and evaluation
//!
//! This crate decides whether a crawler identified by a user-agent token may fetch
//! a URL, by fetching that site's robots.txt, classifying the HTTP outcome, parsing
//! the directives into per-agent rule sets and matching the request path against
//! them with longest-match precedence.

pub mod checker;
pub mod config;
pub mod fetch;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Robots-Checker operations
///
/// Nothing that happens while fetching or parsing a robots.txt file is surfaced
/// here; those outcomes are folded into the verdict. Only malformed input and
/// construction failures reach the caller.
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed URL: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for Robots-Checker operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use checker::{RobotsChecker, Verdict, VerdictReason};
pub use config::Config;
pub use fetch::{classify, FetchOutcome, FetchResult, HttpFetcher, ReqwestFetcher};
pub use robots::{evaluate, matches, parse, select, AgentRules, Rule, RuleKind, RuleSet};
