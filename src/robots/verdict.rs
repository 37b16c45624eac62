use crate::robots::Rule;

/// Finds the rule that decides access to a path
///
/// Every rule is considered, in file order. Among the rules whose pattern matches
/// the path, the one with the longest pattern wins; on equal length an Allow rule
/// beats a Disallow rule. Rules with an empty pattern are ignored.
///
/// # Arguments
///
/// * `rules` - The rules selected for the user agent
/// * `path` - The request path (with query, if any)
///
/// # Returns
///
/// * `Some(&Rule)` - The deciding rule
/// * `None` - If no rule matches
pub fn decide<'a>(rules: &'a [Rule], path: &str) -> Option<&'a Rule> {
    let mut best: Option<&Rule> = None;

    for rule in rules.iter().filter(|rule| rule.matches(path)) {
        best = match best {
            Some(current) if !outranks(rule, current) => Some(current),
            _ => Some(rule),
        };
    }

    best
}

/// Checks if a path is allowed by a rule set
///
/// A path no rule matches is allowed, so an empty rule set allows everything.
///
/// # Examples
///
/// ```
/// use robots_checker::robots::{evaluate, Rule};
///
/// let rules = vec![Rule::disallow("/shop"), Rule::allow("/shop/catalog")];
/// assert!(!evaluate(&rules, "/shop/cart"));
/// assert!(evaluate(&rules, "/shop/catalog/shoes"));
/// assert!(evaluate(&rules, "/about"));
/// ```
pub fn evaluate(rules: &[Rule], path: &str) -> bool {
    decide(rules, path).map_or(true, Rule::is_allow)
}

/// Longer patterns are more specific; Allow breaks ties
fn outranks(candidate: &Rule, current: &Rule) -> bool {
    let (a, b) = (candidate.pattern().len(), current.pattern().len());
    a > b || (a == b && candidate.is_allow() && !current.is_allow())
}
