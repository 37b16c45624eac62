//! Robots.txt handling module
//!
//! This module provides the pure half of robots.txt evaluation: parsing a file into
//! per-agent rule sets, selecting the rule set for a user agent, and deciding whether
//! a path is allowed by it. Fetching lives in [`crate::fetch`].

mod matcher;
mod parser;
mod selector;
mod verdict;

use std::collections::HashMap;

pub use matcher::matches;
pub use parser::parse;
pub use selector::{select, WILDCARD_AGENT};
pub use verdict::{decide, evaluate};

/// Kind of a robots.txt rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `Allow:` line
    Allow,
    /// `Disallow:` line
    Disallow,
}

impl RuleKind {
    /// Returns the directive name as written in robots.txt
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Disallow => "Disallow",
        }
    }
}

/// A single Allow or Disallow rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    kind: RuleKind,
    pattern: String,
}

impl Rule {
    /// Creates a new rule
    pub fn new(kind: RuleKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }

    /// Shorthand for an `Allow:` rule
    pub fn allow(pattern: impl Into<String>) -> Self {
        Self::new(RuleKind::Allow, pattern)
    }

    /// Shorthand for a `Disallow:` rule
    pub fn disallow(pattern: impl Into<String>) -> Self {
        Self::new(RuleKind::Disallow, pattern)
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_allow(&self) -> bool {
        self.kind == RuleKind::Allow
    }

    /// Returns true if this rule matches the given path
    ///
    /// Rules with an empty pattern never match.
    pub fn matches(&self, path: &str) -> bool {
        !self.pattern.is_empty() && matches(&self.pattern, path)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.pattern)
    }
}

/// Ordered rules for one user agent, in file order
pub type RuleSet = Vec<Rule>;

/// Rules from one parsed robots.txt file, keyed by lowercased user-agent token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentRules {
    groups: HashMap<String, RuleSet>,
}

impl AgentRules {
    /// Creates an empty mapping (a file with no rules)
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rules recorded for an agent token, matched case-insensitively
    pub fn get(&self, user_agent: &str) -> Option<&RuleSet> {
        self.groups.get(&user_agent.trim().to_lowercase())
    }

    /// Returns true if the file named this agent token in any group
    pub fn contains_agent(&self, user_agent: &str) -> bool {
        self.get(user_agent).is_some()
    }

    /// Iterates over the recorded agent tokens (lowercased)
    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of distinct agent tokens
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Registers an agent token with no rules yet
    pub(crate) fn open_agent(&mut self, token: &str) {
        self.groups.entry(token.to_lowercase()).or_default();
    }

    /// Appends a rule to an agent token's rule set
    pub(crate) fn push_rule(&mut self, token: &str, rule: Rule) {
        self.groups.entry(token.to_lowercase()).or_default().push(rule);
    }
}
