/// Checks if a URL path matches a robots.txt rule pattern
///
/// Pattern syntax:
/// 1. `*` matches any sequence of characters, including none
/// 2. A trailing `$` anchors the pattern to the end of the path
/// 3. Every other character matches itself literally
///
/// Without a trailing `$` the pattern only has to match the start of the path
/// (robots rules are prefix rules).
///
/// Empty patterns are not special-cased here: `""` is a prefix of every path.
/// Callers that treat `Disallow:` with no value as "no rule" must skip it first.
///
/// # Arguments
///
/// * `pattern` - The rule pattern from an Allow or Disallow line
/// * `path` - The request path (with query, if any)
///
/// # Returns
///
/// * `true` - If the path satisfies the pattern
/// * `false` - Otherwise
///
/// # Examples
///
/// ```
/// use robots_checker::robots::matches;
///
/// assert!(matches("/admin", "/admin/users"));
/// assert!(matches("/*.pdf$", "/docs/report.pdf"));
/// assert!(!matches("/*.pdf$", "/docs/report.pdf?download=1"));
/// assert!(!matches("/private$", "/private/x"));
/// ```
pub fn matches(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix('$') {
        Some(body) => wildcard_match(body.as_bytes(), path.as_bytes(), true),
        None => wildcard_match(pattern.as_bytes(), path.as_bytes(), false),
    }
}

/// Byte-wise glob match with single-star backtracking
///
/// When `anchored` is false the match succeeds as soon as the whole pattern has
/// been consumed, whatever is left of the path.
fn wildcard_match(pattern: &[u8], path: &[u8], anchored: bool) -> bool {
    let mut p = 0;
    let mut t = 0;
    // Position of the last `*` seen and the path index it is currently absorbing up to
    let mut backtrack: Option<(usize, usize)> = None;

    while t < path.len() {
        if !anchored && p == pattern.len() {
            return true;
        }

        if p < pattern.len() && pattern[p] == b'*' {
            backtrack = Some((p, t));
            p += 1;
        } else if p < pattern.len() && pattern[p] == path[t] {
            p += 1;
            t += 1;
        } else if let Some((star, absorbed)) = backtrack {
            // Let the last star swallow one more byte and retry
            p = star + 1;
            t = absorbed + 1;
            backtrack = Some((star, absorbed + 1));
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == b'*' {
        p += 1;
    }

    p == pattern.len()
}
