use crate::url::escape_path;
use crate::{UrlError, UrlResult};
use url::{Position, Url};

/// A URL whose robots.txt permission is being checked
///
/// Holds the two things evaluation needs from the caller's URL: where the site's
/// robots.txt lives, and the path that has to be matched against its rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsTarget {
    /// `{scheme}://{host}[:port]/robots.txt`
    robots_url: Url,
    /// Percent-encoded path plus `?query` when present, escapes uppercased
    path: String,
}

impl RobotsTarget {
    /// Parses a caller-supplied URL
    ///
    /// # Arguments
    ///
    /// * `url_str` - An absolute http or https URL
    ///
    /// # Returns
    ///
    /// * `Ok(RobotsTarget)` - The robots.txt location and request path
    /// * `Err(UrlError)` - The URL is relative, has no host, or is not http(s)
    ///
    /// # Examples
    ///
    /// ```
    /// use robots_checker::url::RobotsTarget;
    ///
    /// let target = RobotsTarget::parse("https://Example.com:8443/a/b?x=1#frag").unwrap();
    /// assert_eq!(target.robots_url().as_str(), "https://example.com:8443/robots.txt");
    /// assert_eq!(target.path(), "/a/b?x=1");
    /// ```
    pub fn parse(url_str: &str) -> UrlResult<Self> {
        let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;
        Self::from_url(&url)
    }

    /// Builds a target from an already parsed URL
    pub fn from_url(url: &Url) -> UrlResult<Self> {
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                url.scheme()
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(UrlError::MissingHost);
        }

        Ok(Self {
            robots_url: robots_url(url)?,
            path: request_path(url),
        })
    }

    /// Location of the site's robots.txt
    pub fn robots_url(&self) -> &Url {
        &self.robots_url
    }

    /// Path matched against robots.txt rules
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Derives the robots.txt URL for the site serving `url`
///
/// Scheme, host and an explicit port are kept; credentials, path, query and
/// fragment are dropped.
fn robots_url(url: &Url) -> UrlResult<Url> {
    let origin = &url[Position::BeforeHost..Position::AfterPort];
    let robots = format!("{}://{}/robots.txt", url.scheme(), origin);
    Url::parse(&robots).map_err(|e| UrlError::Malformed(format!("{}: {}", robots, e)))
}

/// Extracts the path (and query) that robots.txt rules are matched against
fn request_path(url: &Url) -> String {
    let path = &url[Position::BeforePath..Position::AfterQuery];
    if path.is_empty() {
        "/".to_string()
    } else {
        escape_path(path)
    }
}
