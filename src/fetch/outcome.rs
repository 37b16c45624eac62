use crate::fetch::{FetchResult, TransportError};

/// Access decision implied by the robots.txt fetch itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 2xx: the body must be parsed to decide
    Success { body: String },
    /// 429 or 5xx: assume everything is disallowed
    Blocked { status_code: u16 },
    /// Any other status: no robots.txt, everything is allowed
    Unrestricted { status_code: u16 },
    /// No response at all: fail closed
    Unavailable { error: TransportError },
}

impl FetchOutcome {
    /// Verdict for outcomes that do not need the body parsed
    ///
    /// Returns None for `Success`.
    pub fn terminal_verdict(&self) -> Option<bool> {
        match self {
            Self::Success { .. } => None,
            Self::Blocked { .. } | Self::Unavailable { .. } => Some(false),
            Self::Unrestricted { .. } => Some(true),
        }
    }
}

/// Classifies the result of fetching robots.txt
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | HTTP 2xx | Success (parse body) |
/// | HTTP 429 | Blocked |
/// | HTTP 5xx | Blocked |
/// | Any other status (1xx, 3xx, 4xx) | Unrestricted |
/// | Transport failure | Unavailable |
///
/// # Examples
///
/// ```
/// use robots_checker::fetch::{classify, FetchOutcome, FetchResult};
///
/// let not_found = FetchResult::Response { status_code: 404, body: String::new() };
/// assert_eq!(classify(not_found), FetchOutcome::Unrestricted { status_code: 404 });
///
/// let throttled = FetchResult::Response { status_code: 429, body: String::new() };
/// assert_eq!(classify(throttled), FetchOutcome::Blocked { status_code: 429 });
/// ```
pub fn classify(result: FetchResult) -> FetchOutcome {
    match result {
        FetchResult::Response { status_code, body } => match status_code {
            200..=299 => FetchOutcome::Success { body },
            429 | 500..=599 => FetchOutcome::Blocked { status_code },
            _ => FetchOutcome::Unrestricted { status_code },
        },
        FetchResult::NetworkError(error) => FetchOutcome::Unavailable { error },
    }
}
