//! Robots.txt evaluation entry point
//!
//! [`RobotsChecker`] ties the pieces together for one URL:
//! 1. Derive the site's robots.txt location from the URL
//! 2. Fetch it once, bounded by the configured timeout
//! 3. Classify the HTTP outcome
//! 4. On 2xx, parse the file, select the agent's rules and match the request path
//!
//! The checker keeps no state between calls and can be shared across tasks.

use crate::config::Config;
use crate::fetch::{classify, FetchOutcome, HttpFetcher, ReqwestFetcher};
use crate::robots::{decide, parse, select, Rule};
use crate::url::RobotsTarget;
use crate::Result;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Why a verdict was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerdictReason {
    /// robots.txt was parsed and this rule decided
    MatchedRule(Rule),
    /// robots.txt was parsed and no rule for the agent matched the path
    NoMatchingRule,
    /// robots.txt answered with a status meaning "no file"
    Unrestricted { status_code: u16 },
    /// robots.txt answered with 429 or 5xx
    Blocked { status_code: u16 },
    /// robots.txt could not be retrieved
    Unavailable { error: String },
}

impl fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchedRule(rule) => write!(f, "matched rule '{}'", rule),
            Self::NoMatchingRule => write!(f, "no rule matched"),
            Self::Unrestricted { status_code } => {
                write!(f, "robots.txt returned HTTP {}, no restrictions", status_code)
            }
            Self::Blocked { status_code } => {
                write!(f, "robots.txt returned HTTP {}, assuming disallowed", status_code)
            }
            Self::Unavailable { error } => {
                write!(f, "robots.txt unavailable ({}), assuming disallowed", error)
            }
        }
    }
}

/// Outcome of a robots.txt check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the URL may be fetched
    pub allowed: bool,
    /// The robots.txt consulted
    pub robots_url: Url,
    pub reason: VerdictReason,
}

/// Decides robots.txt access for URLs
///
/// # Example
///
/// ```no_run
/// use robots_checker::{Config, RobotsChecker};
///
/// # async fn example() -> robots_checker::Result<()> {
/// let checker = RobotsChecker::new(&Config::default())?;
/// if checker.is_allowed("https://example.com/page", "MyBot").await? {
///     println!("allowed");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RobotsChecker<F = ReqwestFetcher> {
    fetcher: F,
    timeout: Duration,
}

impl RobotsChecker<ReqwestFetcher> {
    /// Creates a checker backed by reqwest, configured from `config`
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(&config.client)?;
        Ok(Self::with_fetcher(fetcher, config.client.timeout()))
    }
}

impl<F: HttpFetcher> RobotsChecker<F> {
    /// Creates a checker around any HTTP collaborator
    ///
    /// `timeout` bounds each robots.txt request.
    pub fn with_fetcher(fetcher: F, timeout: Duration) -> Self {
        Self { fetcher, timeout }
    }

    /// Checks whether `user_agent` may fetch `url`
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute http(s) URL to check
    /// * `user_agent` - The crawler's user-agent token (as named in robots.txt groups)
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the URL may be fetched
    /// * `Ok(false)` - If robots.txt disallows it, or could not be read safely
    /// * `Err(RobotsError::Url)` - If `url` is not a well-formed absolute URL
    pub async fn is_allowed(&self, url: &str, user_agent: &str) -> Result<bool> {
        Ok(self.check(url, user_agent).await?.allowed)
    }

    /// Like [`is_allowed`](Self::is_allowed), but also reports why
    pub async fn check(&self, url: &str, user_agent: &str) -> Result<Verdict> {
        let target = RobotsTarget::parse(url)?;
        let robots_url = target.robots_url().clone();

        tracing::debug!("Fetching {} for {}", robots_url, url);
        let result = self.fetcher.get(&robots_url, self.timeout).await;

        let outcome = classify(result);
        tracing::debug!(
            "robots.txt at {} classified as {}",
            robots_url,
            outcome_name(&outcome)
        );

        let (allowed, reason) = match outcome {
            FetchOutcome::Success { body } => {
                let rules = parse(&body);
                match decide(select(&rules, user_agent), target.path()) {
                    Some(rule) => (rule.is_allow(), VerdictReason::MatchedRule(rule.clone())),
                    None => (true, VerdictReason::NoMatchingRule),
                }
            }
            FetchOutcome::Blocked { status_code } => {
                (false, VerdictReason::Blocked { status_code })
            }
            FetchOutcome::Unrestricted { status_code } => {
                (true, VerdictReason::Unrestricted { status_code })
            }
            FetchOutcome::Unavailable { error } => {
                tracing::warn!("Could not fetch {}: {}", robots_url, error);
                (
                    false,
                    VerdictReason::Unavailable {
                        error: error.to_string(),
                    },
                )
            }
        };

        tracing::info!(
            "{} {} for '{}': {}",
            url,
            if allowed { "allowed" } else { "disallowed" },
            user_agent,
            reason
        );

        Ok(Verdict {
            allowed,
            robots_url,
            reason,
        })
    }
}

fn outcome_name(outcome: &FetchOutcome) -> &'static str {
    match outcome {
        FetchOutcome::Success { .. } => "success",
        FetchOutcome::Blocked { .. } => "blocked",
        FetchOutcome::Unrestricted { .. } => "unrestricted",
        FetchOutcome::Unavailable { .. } => "unavailable",
    }
}
