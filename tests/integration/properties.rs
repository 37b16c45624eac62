//! Property tests for path matching and rule precedence

use proptest::prelude::*;
use robots_checker::robots::{decide, evaluate, matches, parse, select, Rule, RuleKind};

/// Literal robots path without wildcard or anchor characters
fn literal_path() -> impl Strategy<Value = String> {
    "/[a-zA-Z0-9/._~?=&%+()-]{0,16}"
}

/// Anything a request path might contain after a prefix
fn suffix() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/._~?=&%+$*()-]{0,16}"
}

fn rule_kind() -> impl Strategy<Value = RuleKind> {
    prop_oneof![Just(RuleKind::Allow), Just(RuleKind::Disallow)]
}

proptest! {
    /// With no rules every path is allowed.
    #[test]
    fn empty_rules_allow_everything(path in "\\PC*") {
        prop_assert!(evaluate(&[], &path));
    }

    /// A literal pattern matches any path it is a prefix of.
    #[test]
    fn literal_prefix_matches_extensions(prefix in literal_path(), rest in suffix()) {
        let path = format!("{}{}", prefix, rest);
        prop_assert!(matches(&prefix, &prefix));
        prop_assert!(matches(&prefix, &path));
    }

    /// A `$`-anchored literal matches only the identical path.
    #[test]
    fn anchored_literal_matches_exactly(lit in literal_path(), rest in "[a-z/]{1,8}") {
        let pattern = format!("{}$", lit);
        let longer = format!("{}{}", lit, rest);
        prop_assert!(matches(&pattern, &lit));
        prop_assert!(!matches(&pattern, &longer));
    }

    /// A trailing `*` never changes what a prefix pattern matches.
    #[test]
    fn trailing_star_is_redundant(pattern in literal_path(), path in "/[a-z/?=]{0,16}") {
        let starred = format!("{}*", pattern);
        prop_assert_eq!(matches(&pattern, &path), matches(&starred, &path));
    }

    /// Matching is total: arbitrary input never panics.
    #[test]
    fn matcher_is_total(pattern in "\\PC{0,24}", path in "\\PC{0,24}") {
        let _ = matches(&pattern, &path);
    }

    /// Of two matching rules, the longer pattern decides whatever the file order.
    #[test]
    fn longer_pattern_decides(
        base in literal_path(),
        ext in "[a-z]{1,8}",
        rest in suffix(),
        short_kind in rule_kind(),
        long_kind in rule_kind(),
    ) {
        let long = format!("{}{}", base, ext);
        let path = format!("{}{}", long, rest);
        let expected = long_kind == RuleKind::Allow;

        let forward = vec![Rule::new(short_kind, base.clone()), Rule::new(long_kind, long.clone())];
        let reverse = vec![Rule::new(long_kind, long.clone()), Rule::new(short_kind, base.clone())];

        prop_assert_eq!(evaluate(&forward, &path), expected);
        prop_assert_eq!(evaluate(&reverse, &path), expected);
    }

    /// Equal-length Allow and Disallow matches resolve to Allow.
    #[test]
    fn allow_wins_ties(pattern in literal_path(), rest in suffix(), allow_first in any::<bool>()) {
        let path = format!("{}{}", pattern, rest);
        let rules = if allow_first {
            vec![Rule::allow(pattern.clone()), Rule::disallow(pattern.clone())]
        } else {
            vec![Rule::disallow(pattern.clone()), Rule::allow(pattern.clone())]
        };
        prop_assert!(evaluate(&rules, &path));
        prop_assert_eq!(decide(&rules, &path).map(Rule::kind), Some(RuleKind::Allow));
    }

    /// Disallowing `/` blocks every path for the agent.
    #[test]
    fn disallow_root_blocks_everything(path in "/\\PC*", agent in "[a-zA-Z][a-zA-Z0-9_-]{0,12}") {
        let body = format!("User-agent: {}\nDisallow: /\n", agent);
        let rules = parse(&body);
        prop_assert!(!evaluate(select(&rules, &agent.to_uppercase()), &path));
    }

    /// Parsing never panics, whatever the input.
    #[test]
    fn parse_is_total(body in "\\PC{0,256}") {
        let rules = parse(&body);
        prop_assert_eq!(rules.agents().count(), rules.len());
    }

    /// Agent groups are found whatever the case of the caller's token.
    #[test]
    fn agent_lookup_ignores_ascii_case(agent in "[a-zA-Z][a-zA-Z0-9_-]{0,12}", flip in any::<bool>()) {
        let rules = parse(&format!("User-agent: {}\nDisallow: /x\n", agent));
        let caller = if flip { agent.to_ascii_uppercase() } else { agent.to_ascii_lowercase() };
        prop_assert_eq!(select(&rules, &caller), &[Rule::disallow("/x")][..]);
    }

    /// A generated `*` group round-trips through parse and evaluate.
    #[test]
    fn generated_file_round_trip(
        dir in "/[a-z]{1,10}",
        rest in "/[a-z0-9]{0,10}",
        other in "/[a-z]{1,10}",
    ) {
        prop_assume!(!other.starts_with(&dir));
        let body = format!("User-agent: *\nDisallow: {}\n", dir);
        let rules = parse(&body);
        let set = select(&rules, "AnyBot");

        let blocked = format!("{}{}", dir, rest);
        prop_assert!(!evaluate(set, &blocked));
        prop_assert!(evaluate(set, &other));
    }
}
