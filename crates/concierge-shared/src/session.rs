//! In-memory chat session.
//!
//! Wires user submissions to the matcher the way the chat widget does:
//! the user's text is recorded as plain (escaped) text, the reply arrives
//! after a short cosmetic delay and is recorded as trusted markup.
//! Nothing is persisted.

use crate::markup::escape_html;
use crate::matcher::Matcher;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Default "typing" delay before a reply is shown
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// Message body, tagged by trust level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum MessageBody {
    /// User-controlled text, never interpreted as markup
    Plain(String),
    /// Markup produced by responders from the knowledge base
    Trusted(String),
}

impl MessageBody {
    /// HTML suitable for insertion into a chat bubble
    pub fn to_html(&self) -> String {
        match self {
            MessageBody::Plain(text) => escape_html(text),
            MessageBody::Trusted(markup) => markup.clone(),
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            MessageBody::Plain(text) | MessageBody::Trusted(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub speaker: Speaker,
    pub body: MessageBody,
    pub at: DateTime<Utc>,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self {
            speaker: Speaker::User,
            body: MessageBody::Plain(text.to_string()),
            at: Utc::now(),
        }
    }

    pub fn bot(markup: String) -> Self {
        Self {
            speaker: Speaker::Bot,
            body: MessageBody::Trusted(markup),
            at: Utc::now(),
        }
    }
}

/// A user message and the reply it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationTurn {
    pub user: Message,
    pub bot: Message,
}

/// Append-only message list plus the matcher that answers it
pub struct ChatSession {
    matcher: Matcher,
    reply_delay: Duration,
    messages: Vec<Message>,
}

impl ChatSession {
    /// New session, opened with the welcome message
    pub fn new(matcher: Matcher) -> Self {
        let welcome = Message::bot(matcher.welcome());
        Self {
            matcher,
            reply_delay: DEFAULT_REPLY_DELAY,
            messages: vec![welcome],
        }
    }

    /// Override the cosmetic delay (zero in tests)
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Handle one user submission.
    ///
    /// Whitespace-only input is ignored and records nothing. Otherwise the
    /// trimmed text is recorded, the reply delay elapses, and the matcher's
    /// reply is recorded after it.
    pub async fn submit(&mut self, text: &str) -> Option<ConversationTurn> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring empty submission");
            return None;
        }

        let user = Message::user(text);
        self.messages.push(user.clone());

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let bot = Message::bot(self.matcher.respond(text));
        self.messages.push(bot.clone());
        info!(messages = self.messages.len(), "reply rendered");

        Some(ConversationTurn { user, bot })
    }

    /// Completed turns, oldest first (the welcome message is not a turn)
    pub fn turns(&self) -> Vec<ConversationTurn> {
        let mut turns = Vec::new();
        let mut pending: Option<&Message> = None;
        for message in &self.messages {
            match message.speaker {
                Speaker::User => pending = Some(message),
                Speaker::Bot => {
                    if let Some(user) = pending.take() {
                        turns.push(ConversationTurn {
                            user: user.clone(),
                            bot: message.clone(),
                        });
                    }
                }
            }
        }
        turns
    }
}
