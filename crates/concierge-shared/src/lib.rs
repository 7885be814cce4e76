//! Shared types and logic for Concierge components.
//!
//! Knowledge base, intent catalog, matcher and chat session. The CLI in
//! `conciergectl` is a thin layer over these.

pub mod config;
pub mod error;
pub mod intents;
pub mod knowledge;
pub mod markup;
pub mod matcher;
pub mod responses;
pub mod session;

pub use config::{ColorMode, ConciergeConfig};
pub use error::ConciergeError;
pub use intents::{IntentCatalog, IntentKind, IntentRule};
pub use knowledge::KnowledgeBase;
pub use matcher::{IntentMatch, Matcher};
pub use session::{ChatSession, ConversationTurn, Message, MessageBody, Speaker};
