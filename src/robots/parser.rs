//! Robots.txt parser implementation
//!
//! Turns raw robots.txt content into [`AgentRules`]. Parsing is lenient: lines
//! that cannot be interpreted are skipped and the function never fails.

use crate::robots::{AgentRules, Rule, RuleKind};
use crate::url::escape_path;

/// A recognized line of a robots.txt file
#[derive(Debug, PartialEq, Eq)]
enum Directive<'a> {
    UserAgent(&'a str),
    Rule(RuleKind, &'a str),
    /// Crawl-delay, Sitemap, Host and anything else with a `key: value` shape
    Other,
}

/// Parses robots.txt content into per-agent rule sets
///
/// # Grouping
///
/// Consecutive `User-agent` lines form one group; the Allow/Disallow lines that
/// follow apply to every agent in the group. The first `User-agent` line after a
/// rule starts a new group. Rules before any `User-agent` line belong to nobody and
/// are dropped. An agent named in several groups collects the rules of all of them.
///
/// Other directives (Crawl-delay, Sitemap, ...) are ignored and do not end a group.
///
/// Patterns are stored percent-encoded (see [`escape_path`]) so they compare
/// byte-for-byte with request paths.
///
/// # Arguments
///
/// * `content` - The raw robots.txt file content
///
/// # Returns
///
/// The rules found in the file, keyed by lowercased agent token
///
/// # Examples
///
/// ```
/// use robots_checker::robots::parse;
///
/// let rules = parse("User-agent: A\nUser-agent: B\nDisallow: /private\n");
/// assert_eq!(rules.get("a"), rules.get("b"));
/// assert_eq!(rules.len(), 2);
/// ```
pub fn parse(content: &str) -> AgentRules {
    let mut rules = AgentRules::new();
    let mut group: Vec<&str> = Vec::new();
    let mut group_has_rules = false;

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for line in content.split(['\n', '\r']) {
        let Some(directive) = parse_line(line) else {
            continue;
        };

        match directive {
            Directive::UserAgent(token) => {
                if group_has_rules {
                    group.clear();
                    group_has_rules = false;
                }
                rules.open_agent(token);
                group.push(token);
            }
            Directive::Rule(kind, pattern) => {
                if group.is_empty() {
                    tracing::trace!("Dropping {} rule outside any group", kind.as_str());
                    continue;
                }
                let pattern = escape_path(pattern);
                for token in &group {
                    rules.push_rule(token, Rule::new(kind, pattern.as_str()));
                }
                group_has_rules = true;
            }
            Directive::Other => {}
        }
    }

    rules
}

/// Interprets a single line, returning None for blank, comment and malformed lines
fn parse_line(line: &str) -> Option<Directive<'_>> {
    // Everything from '#' on is a comment
    let line = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };

    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let value = value.trim();

    if key.eq_ignore_ascii_case("user-agent") {
        if value.is_empty() {
            return None;
        }
        Some(Directive::UserAgent(value))
    } else if key.eq_ignore_ascii_case("allow") {
        Some(Directive::Rule(RuleKind::Allow, value))
    } else if key.eq_ignore_ascii_case("disallow") {
        Some(Directive::Rule(RuleKind::Disallow, value))
    } else if key.is_empty() || key.contains(char::is_whitespace) {
        None
    } else {
        Some(Directive::Other)
    }
}
