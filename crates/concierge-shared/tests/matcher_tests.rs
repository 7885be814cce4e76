//! Matcher behavior against the reference catalog.

use concierge_shared::intents::{IntentCatalog, IntentKind, IntentRule};
use concierge_shared::knowledge::KnowledgeBase;
use concierge_shared::matcher::{best_match, Matcher};
use concierge_shared::responses;

fn kind_of(input: &str) -> Option<IntentKind> {
    best_match(&IntentCatalog::builtin(), input).map(|m| m.kind)
}

#[test]
fn test_deterministic() {
    let matcher = Matcher::builtin();
    for input in ["when do you open", "xyzzy", "", "parking near the venue?"] {
        assert_eq!(matcher.respond(input), matcher.respond(input));
    }
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let matcher = Matcher::builtin();
    assert_eq!(matcher.respond("  BOOK a table  "), matcher.respond("book a table"));
}

#[test]
fn test_empty_input_yields_fallback() {
    let matcher = Matcher::builtin();
    let fallback = matcher.fallback();
    assert_eq!(matcher.respond(""), fallback);
    assert_eq!(matcher.respond("   "), fallback);
    assert_eq!(matcher.find_response("\t\n"), None);
}

#[test]
fn test_unrecognized_input_yields_fallback() {
    let matcher = Matcher::builtin();
    assert_eq!(matcher.respond("qwxz"), matcher.fallback());
    assert!(matcher.respond("qwxz").contains("020 8691 0263"));
}

#[test]
fn test_opening_time_routes_to_hours() {
    assert_eq!(kind_of("what time do you open"), Some(IntentKind::Hours));

    let matcher = Matcher::builtin();
    let reply = matcher.respond("what time do you open");
    assert!(reply.contains("Opening Hours:"));
    assert!(reply.contains("Friday: 4 PM – 12 AM"));
}

#[test]
fn test_party_substring_routes_to_private_events() {
    assert_eq!(kind_of("I'd like to have a party"), Some(IntentKind::PrivateEvents));
}

#[test]
fn test_substring_overmatch_is_preserved() {
    // Word boundaries are ignored: "car" inside "scarf", "hi" inside "this"
    assert_eq!(kind_of("scarf"), Some(IntentKind::Parking));
    assert_eq!(kind_of("this"), Some(IntentKind::Greeting));
}

#[test]
fn test_booking_end_to_end() {
    let matcher = Matcher::builtin();
    let kb = KnowledgeBase::builtin();
    let reply = matcher.respond("Can I book a table for Friday?");

    assert!(reply.contains(&kb.restaurant.booking_url));
    assert!(reply.contains(&kb.restaurant.phone));
    assert_eq!(reply, responses::respond(IntentKind::Booking, &kb));
}

#[test]
fn test_longer_patterns_outweigh_shorter() {
    // "monika fish" + "fish" beats "menu"
    assert_eq!(kind_of("is monika fish on the menu"), Some(IntentKind::SignatureFish));
}

#[test]
fn test_tie_keeps_first_rule() {
    let catalog = IntentCatalog::new(vec![
        IntentRule::new(IntentKind::Thanks, ["abcd"]),
        IntentRule::new(IntentKind::Farewell, ["wxyz"]),
    ])
    .unwrap();

    let found = best_match(&catalog, "abcd wxyz").unwrap();
    assert_eq!(found.kind, IntentKind::Thanks);
    assert_eq!(found.score, 4);

    let reversed = IntentCatalog::new(vec![
        IntentRule::new(IntentKind::Farewell, ["wxyz"]),
        IntentRule::new(IntentKind::Thanks, ["abcd"]),
    ])
    .unwrap();
    assert_eq!(best_match(&reversed, "abcd wxyz").unwrap().kind, IntentKind::Farewell);
}

#[test]
fn test_tie_on_builtin_offer_goes_to_menu() {
    // "offer" is both a menu and a promotions pattern; menu comes first
    assert_eq!(kind_of("what do you offer"), Some(IntentKind::Menu));
}

#[test]
fn test_custom_catalog_drives_matcher() {
    let catalog = IntentCatalog::new(vec![IntentRule::new(IntentKind::Wifi, ["router"])]).unwrap();
    let matcher = Matcher::new(catalog, KnowledgeBase::builtin());

    assert!(matcher.respond("is the router on").contains("Wi-Fi"));
    assert_eq!(matcher.respond("book a table"), matcher.fallback());
}

#[test]
fn test_every_builtin_intent_is_reachable() {
    let catalog = IntentCatalog::builtin();
    let matcher = Matcher::builtin();
    for rule in catalog.rules() {
        let longest = rule
            .patterns
            .iter()
            .max_by_key(|p| p.len())
            .unwrap();
        assert_eq!(kind_of(longest), Some(rule.kind), "pattern '{}'", longest);
        assert!(matcher.find_response(longest).is_some());
    }
}
