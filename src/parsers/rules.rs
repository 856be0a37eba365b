//! Ordered pattern rules with per-field match policies
//!
//! A field is a list of rules plus a [`MatchPolicy`]. `FirstMatch` stops at
//! the first rule (in table order) that matches anywhere in the text;
//! `Accumulate` evaluates every rule and keeps every emission, de-duplicated
//! by exact string in first-seen order.
//!
//! All patterns compile case-insensitively at construction. A malformed
//! pattern is a hard error, never a silent skip.

use regex::Regex;

use crate::error::ApothecaryError;
use crate::utils::push_unique;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    FirstMatch,
    Accumulate,
}

/// What a matching rule contributes to its field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Fixed label, e.g. the authored vocabulary term
    Label(&'static str),
    /// The full matched text
    Matched,
    /// Capture group 1, trimmed
    Capture,
}

#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    emit: Emit,
}

impl PatternRule {
    pub fn new(pattern: &str, emit: Emit) -> crate::Result<Self> {
        let regex = Regex::new(&format!("(?i){}", pattern)).map_err(|source| {
            ApothecaryError::Pattern {
                rule: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self { regex, emit })
    }

    /// Word-bounded vocabulary term that emits itself
    pub fn term(term: &'static str) -> crate::Result<Self> {
        Self::new(&format!(r"\b{}\b", regex::escape(term)), Emit::Label(term))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// First emission of this rule in `text`
    fn first(&self, text: &str) -> Option<String> {
        match self.emit {
            Emit::Label(label) => self.regex.is_match(text).then(|| label.to_string()),
            Emit::Matched => self.regex.find(text).map(|m| m.as_str().to_string()),
            Emit::Capture => self
                .regex
                .captures_iter(text)
                .find_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string())),
        }
    }

    /// Every emission of this rule in `text`, in match order
    fn all(&self, text: &str) -> Vec<String> {
        match self.emit {
            Emit::Label(label) => {
                if self.regex.is_match(text) {
                    vec![label.to_string()]
                } else {
                    Vec::new()
                }
            }
            Emit::Matched => self
                .regex
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect(),
            Emit::Capture => self
                .regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
                .collect(),
        }
    }
}

/// Named field extracted by an ordered rule list
#[derive(Debug, Clone)]
pub struct FieldRules {
    field: &'static str,
    policy: MatchPolicy,
    rules: Vec<PatternRule>,
}

impl FieldRules {
    pub fn new(field: &'static str, policy: MatchPolicy, rules: Vec<PatternRule>) -> Self {
        Self { field, policy, rules }
    }

    /// Compile `(pattern, emit)` rows in order
    pub fn compile(
        field: &'static str,
        policy: MatchPolicy,
        table: &[(&str, Emit)],
    ) -> crate::Result<Self> {
        let rules = table
            .iter()
            .map(|(pattern, emit)| PatternRule::new(pattern, *emit))
            .collect::<crate::Result<Vec<_>>>()?;
        Ok(Self::new(field, policy, rules))
    }

    /// One word-bounded rule per vocabulary term
    pub fn vocabulary(
        field: &'static str,
        policy: MatchPolicy,
        terms: &[&'static str],
    ) -> crate::Result<Self> {
        let rules = terms
            .iter()
            .map(|&term| PatternRule::term(term))
            .collect::<crate::Result<Vec<_>>>()?;
        Ok(Self::new(field, policy, rules))
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Apply the field's policy
    pub fn apply(&self, text: &str) -> Vec<String> {
        match self.policy {
            MatchPolicy::FirstMatch => self.first(text).into_iter().collect(),
            MatchPolicy::Accumulate => self.accumulate(text),
        }
    }

    /// Emission of the first rule that matches
    pub fn first(&self, text: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.first(text))
    }

    /// All emissions of all rules, de-duplicated in first-seen order
    pub fn accumulate(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for rule in &self.rules {
            for value in rule.all(text) {
                push_unique(&mut out, &value);
            }
        }
        out
    }
}
