use crate::robots::{AgentRules, Rule};

/// Agent token of the catch-all group
pub const WILDCARD_AGENT: &str = "*";

/// Selects the rule set that applies to a user agent
///
/// Selection order:
/// 1. The group naming `user_agent` exactly (case-insensitive)
/// 2. The `*` group
/// 3. An empty rule set (no restrictions)
///
/// An exact match replaces the `*` group entirely; the two are never merged.
///
/// # Arguments
///
/// * `rules` - The parsed robots.txt rules
/// * `user_agent` - The caller's user-agent token
///
/// # Returns
///
/// The applicable rules, in file order
///
/// # Examples
///
/// ```
/// use robots_checker::robots::{parse, select, Rule};
///
/// let rules = parse("User-agent: MyBot\nDisallow: /\n\nUser-agent: *\nDisallow: /admin");
/// assert_eq!(select(&rules, "mybot"), &[Rule::disallow("/")]);
/// assert_eq!(select(&rules, "OtherBot"), &[Rule::disallow("/admin")]);
/// ```
pub fn select<'a>(rules: &'a AgentRules, user_agent: &str) -> &'a [Rule] {
    if let Some(set) = rules.get(user_agent) {
        tracing::debug!("Using rules for agent '{}'", user_agent.trim());
        return set;
    }

    if let Some(set) = rules.get(WILDCARD_AGENT) {
        tracing::debug!("No group for agent '{}', using '*'", user_agent.trim());
        return set;
    }

    tracing::debug!("No applicable group for agent '{}'", user_agent.trim());
    &[]
}
