use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Robots-Checker
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
}

/// HTTP client configuration used to fetch robots.txt
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// User-Agent header sent with robots.txt requests
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Connection establishment timeout (milliseconds)
    #[serde(rename = "connect-timeout-ms")]
    pub connect_timeout_ms: u64,

    /// Whether 3xx responses are followed before classification
    #[serde(rename = "redirect-policy")]
    pub redirect_policy: RedirectPolicy,

    /// Maximum redirect hops when following
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// Robots.txt bodies longer than this are truncated
    #[serde(rename = "max-body-bytes")]
    pub max_body_bytes: usize,
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("robots-checker/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
            redirect_policy: RedirectPolicy::Follow,
            max_redirects: 5,
            max_body_bytes: 500 * 1024,
        }
    }
}

/// Redirect handling for robots.txt requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectPolicy {
    /// Follow up to `max-redirects` hops and classify the final response
    Follow,
    /// Classify the 3xx response itself (treated as "no robots.txt")
    None,
}
