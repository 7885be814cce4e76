//! Intent catalog.
//!
//! A fixed, ordered list of `(IntentKind, patterns)` records. The kind picks
//! the responder, the patterns feed the matcher's score. Order only matters
//! for ties: the earliest rule with the best score wins.

use crate::error::{ConciergeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized user goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Booking,
    Hours,
    Menu,
    SignatureFish,
    Prawns,
    Suya,
    Jollof,
    Location,
    Parking,
    Contact,
    PrivateEvents,
    Venue,
    Dietary,
    Promotions,
    Story,
    Gallery,
    Greeting,
    Thanks,
    Farewell,
    Pricing,
    Takeaway,
    Wifi,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Hours => "hours",
            Self::Menu => "menu",
            Self::SignatureFish => "signature_fish",
            Self::Prawns => "prawns",
            Self::Suya => "suya",
            Self::Jollof => "jollof",
            Self::Location => "location",
            Self::Parking => "parking",
            Self::Contact => "contact",
            Self::PrivateEvents => "private_events",
            Self::Venue => "venue",
            Self::Dietary => "dietary",
            Self::Promotions => "promotions",
            Self::Story => "story",
            Self::Gallery => "gallery",
            Self::Greeting => "greeting",
            Self::Thanks => "thanks",
            Self::Farewell => "farewell",
            Self::Pricing => "pricing",
            Self::Takeaway => "takeaway",
            Self::Wifi => "wifi",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Reference catalog, in matching order
const BUILTIN_RULES: &[(IntentKind, &[&str])] = &[
    (IntentKind::Booking, &["book", "reserve", "reservation", "table", "booking"]),
    (IntentKind::Hours, &["hour", "open", "close", "time", "when", "schedule"]),
    (IntentKind::Menu, &["menu", "food", "dish", "eat", "cuisine", "serve", "offer"]),
    (IntentKind::SignatureFish, &["fish", "monika fish", "signature"]),
    (IntentKind::Prawns, &["prawn", "shrimp"]),
    (IntentKind::Suya, &["suya", "kebab", "skewer"]),
    (IntentKind::Jollof, &["jollof", "rice"]),
    (IntentKind::Location, &["location", "address", "where", "find", "direction", "map"]),
    (IntentKind::Parking, &["park", "car", "drive", "parking"]),
    (IntentKind::Contact, &["contact", "phone", "call", "email", "reach"]),
    (IntentKind::PrivateEvents, &["private", "event", "party", "celebration", "birthday", "group"]),
    (IntentKind::Venue, &["venue", "space", "interior", "decor", "ambiance", "atmosphere"]),
    (IntentKind::Dietary, &["vegan", "vegetarian", "gluten", "allerg", "dietary", "halal"]),
    (IntentKind::Promotions, &["promo", "offer", "deal", "discount", "special"]),
    (IntentKind::Story, &["story", "about", "history", "who"]),
    (IntentKind::Gallery, &["gallery", "photo", "picture", "image"]),
    (IntentKind::Greeting, &["hello", "hi", "hey", "good morning", "good evening", "good afternoon"]),
    (IntentKind::Thanks, &["thank", "thanks", "cheers", "appreciate"]),
    (IntentKind::Farewell, &["bye", "goodbye", "see you", "later"]),
    (IntentKind::Pricing, &["price", "cost", "expensive", "cheap", "afford", "budget"]),
    (IntentKind::Takeaway, &["delivery", "takeaway", "take away", "collect", "pickup"]),
    (IntentKind::Wifi, &["wifi", "wi-fi", "internet"]),
];

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub kind: IntentKind,
    /// Lowercase keywords or short phrases, never empty
    pub patterns: Vec<String>,
}

impl IntentRule {
    pub fn new<I, S>(kind: IntentKind, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(ConciergeError::Catalog(format!(
                "intent '{}' has no patterns",
                self.kind
            )));
        }
        for pattern in &self.patterns {
            if pattern.trim().is_empty() {
                return Err(ConciergeError::Catalog(format!(
                    "intent '{}' has a blank pattern",
                    self.kind
                )));
            }
            if pattern.to_lowercase() != *pattern {
                return Err(ConciergeError::Catalog(format!(
                    "intent '{}' pattern '{}' is not lowercase",
                    self.kind, pattern
                )));
            }
        }
        Ok(())
    }
}

/// Ordered, immutable list of intent rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentCatalog {
    rules: Vec<IntentRule>,
}

impl IntentCatalog {
    /// Build a catalog from custom rules, checking every rule
    pub fn new(rules: Vec<IntentRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    /// The reference catalog
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(kind, patterns)| IntentRule::new(*kind, patterns.iter().copied()))
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for IntentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = IntentCatalog::builtin();
        assert_eq!(catalog.len(), 22);
        assert!(IntentCatalog::new(catalog.rules().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_order_starts_with_booking() {
        let catalog = IntentCatalog::builtin();
        assert_eq!(catalog.rules()[0].kind, IntentKind::Booking);
        assert_eq!(catalog.rules()[1].kind, IntentKind::Hours);
        assert_eq!(catalog.rules().last().map(|r| r.kind), Some(IntentKind::Wifi));
    }

    #[test]
    fn test_empty_patterns_rejected() {
        let rules = vec![IntentRule::new(IntentKind::Hours, Vec::<String>::new())];
        let err = IntentCatalog::new(rules).unwrap_err();
        assert!(err.to_string().contains("no patterns"));
    }

    #[test]
    fn test_uppercase_pattern_rejected() {
        let rules = vec![IntentRule::new(IntentKind::Hours, ["Open"])];
        assert!(IntentCatalog::new(rules).is_err());
    }

    #[test]
    fn test_blank_pattern_rejected() {
        let rules = vec![IntentRule::new(IntentKind::Hours, ["open", "  "])];
        assert!(IntentCatalog::new(rules).is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(IntentKind::PrivateEvents.to_string(), "private_events");
        assert_eq!(IntentKind::Wifi.to_string(), "wifi");
    }
}
