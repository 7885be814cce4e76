//! Keyword matcher.
//!
//! Scores every rule in the catalog against the normalized input and picks
//! the best one:
//!
//! 1. Normalize: trim + lowercase. Empty input matches nothing.
//! 2. Score: sum of pattern lengths for every pattern found as a substring.
//!    Word boundaries are ignored ("car" matches inside "scarf").
//! 3. Strictly greater scores replace the current best, so ties keep the
//!    earliest rule in catalog order.
//! 4. A best score above zero selects that rule's responder, otherwise the
//!    fallback reply is used.

use crate::intents::{IntentCatalog, IntentKind, IntentRule};
use crate::knowledge::KnowledgeBase;
use crate::responses;
use std::sync::Arc;
use tracing::debug;

/// Winning rule for an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentMatch {
    pub kind: IntentKind,
    pub score: usize,
    /// Patterns that contributed to the score, in rule order
    pub matched_patterns: Vec<String>,
}

/// Trim and lowercase; `None` for empty input
pub fn normalize(input: &str) -> Option<String> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Score of one rule against already-normalized input
pub fn score_rule(rule: &IntentRule, normalized: &str) -> usize {
    rule.patterns
        .iter()
        .filter(|pattern| normalized.contains(pattern.as_str()))
        .map(|pattern| pattern.chars().count())
        .sum()
}

/// Best-scoring rule, or `None` when nothing scores above zero
pub fn best_match(catalog: &IntentCatalog, input: &str) -> Option<IntentMatch> {
    let normalized = normalize(input)?;

    let mut best: Option<&IntentRule> = None;
    let mut best_score = 0;

    for rule in catalog.rules() {
        let score = score_rule(rule, &normalized);
        if score > best_score {
            best_score = score;
            best = Some(rule);
        }
    }

    let rule = best?;
    let matched_patterns = rule
        .patterns
        .iter()
        .filter(|pattern| normalized.contains(pattern.as_str()))
        .cloned()
        .collect();

    Some(IntentMatch {
        kind: rule.kind,
        score: best_score,
        matched_patterns,
    })
}

/// Catalog plus knowledge base: the whole question-answering surface
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<IntentCatalog>,
    knowledge: Arc<KnowledgeBase>,
}

impl Matcher {
    pub fn new(catalog: IntentCatalog, knowledge: KnowledgeBase) -> Self {
        Self {
            catalog: Arc::new(catalog),
            knowledge: Arc::new(knowledge),
        }
    }

    /// Reference catalog and built-in knowledge base
    pub fn builtin() -> Self {
        Self::new(IntentCatalog::builtin(), KnowledgeBase::builtin())
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn best_match(&self, input: &str) -> Option<IntentMatch> {
        best_match(&self.catalog, input)
    }

    /// Reply for a matched intent, `None` when nothing matched
    pub fn find_response(&self, input: &str) -> Option<String> {
        match self.best_match(input) {
            Some(found) => {
                debug!(
                    intent = %found.kind,
                    score = found.score,
                    patterns = ?found.matched_patterns,
                    "intent matched"
                );
                Some(responses::respond(found.kind, &self.knowledge))
            }
            None => {
                debug!("no intent matched");
                None
            }
        }
    }

    /// Reply for any input; unmatched or empty input gets the fallback
    pub fn respond(&self, input: &str) -> String {
        self.find_response(input)
            .unwrap_or_else(|| self.fallback())
    }

    pub fn fallback(&self) -> String {
        responses::fallback(&self.knowledge)
    }

    pub fn welcome(&self) -> String {
        responses::welcome(&self.knowledge)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  BOOK a Table "), Some("book a table".to_string()));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_score_sums_pattern_lengths() {
        let rule = IntentRule::new(IntentKind::Booking, ["book", "table", "booking"]);
        assert_eq!(score_rule(&rule, "booking a table"), 4 + 5 + 7);
        assert_eq!(score_rule(&rule, "nothing here"), 0);
    }

    #[test]
    fn test_best_match_reports_patterns() {
        let found = best_match(&IntentCatalog::builtin(), "Can I book a table?").unwrap();
        assert_eq!(found.kind, IntentKind::Booking);
        assert_eq!(found.score, 9);
        assert_eq!(found.matched_patterns, vec!["book", "table"]);
    }

    #[test]
    fn test_no_match() {
        assert!(best_match(&IntentCatalog::builtin(), "xyzzy").is_none());
    }
}
