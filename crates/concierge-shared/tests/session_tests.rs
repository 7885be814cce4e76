//! Chat session flow with the reply delay disabled.

use concierge_shared::knowledge::KnowledgeBase;
use concierge_shared::matcher::Matcher;
use concierge_shared::session::{ChatSession, MessageBody, Speaker};
use std::time::Duration;

fn session() -> ChatSession {
    ChatSession::new(Matcher::builtin()).with_reply_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_submit_records_user_and_reply() {
    let mut session = session();
    let turn = session.submit("  What time do you open?  ").await.unwrap();

    assert_eq!(turn.user.speaker, Speaker::User);
    assert_eq!(turn.user.body, MessageBody::Plain("What time do you open?".to_string()));
    assert_eq!(turn.bot.speaker, Speaker::Bot);
    assert!(turn.bot.body.raw().contains("Opening Hours:"));

    // welcome + user + bot
    assert_eq!(session.messages().len(), 3);
    assert_eq!(session.turns(), vec![turn]);
}

#[tokio::test]
async fn test_empty_submission_ignored() {
    let mut session = session();
    assert!(session.submit("   ").await.is_none());
    assert!(session.submit("").await.is_none());
    assert_eq!(session.messages().len(), 1);
}

#[tokio::test]
async fn test_script_tag_shown_literally() {
    let mut session = session();
    let turn = session.submit("<script>alert(1)</script>").await.unwrap();

    let html = turn.user.body.to_html();
    assert!(!html.contains("<script>"));
    assert_eq!(html, "&lt;script&gt;alert(1)&lt;/script&gt;");
    assert_eq!(turn.bot.body.raw(), session.matcher().fallback());
}

#[tokio::test]
async fn test_replies_keep_submission_order() {
    let mut session = session();
    let questions = ["hello", "where are you", "thanks", "bye"];
    for q in questions {
        session.submit(q).await;
    }

    let turns = session.turns();
    assert_eq!(turns.len(), questions.len());
    for (turn, q) in turns.iter().zip(questions) {
        assert_eq!(turn.user.body.raw(), q);
        assert_eq!(turn.bot.body.raw(), session.matcher().respond(q));
    }
}

#[tokio::test(start_paused = true)]
async fn test_reply_waits_for_delay() {
    let mut session = ChatSession::new(Matcher::builtin())
        .with_reply_delay(Duration::from_millis(400));

    let start = tokio::time::Instant::now();
    session.submit("menu").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn test_welcome_uses_restaurant_name() {
    let session = session();
    let kb = KnowledgeBase::builtin();
    assert!(session.messages()[0].body.raw().contains(&kb.restaurant.name));
}

#[tokio::test]
async fn test_transcript_serializes_with_trust_tags() {
    let mut session = session();
    let turn = session.submit("<b>hi</b>").await.unwrap();

    let user = serde_json::to_value(&turn.user).unwrap();
    assert_eq!(user["speaker"], "user");
    assert_eq!(user["body"]["kind"], "plain");
    assert_eq!(user["body"]["text"], "<b>hi</b>");

    let bot = serde_json::to_value(&turn.bot).unwrap();
    assert_eq!(bot["body"]["kind"], "trusted");
}
