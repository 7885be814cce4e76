//! Terminal rendering of chat messages.
//!
//! Bot replies are trusted markup and get rendered: bold becomes bold,
//! anchors become `label (href)`, `<br>` becomes a newline. User text is
//! printed verbatim; a terminal never interprets it as markup.

use concierge_shared::config::{ColorMode, OutputConfig};
use concierge_shared::markup::{self, Segment};
use concierge_shared::session::{Message, MessageBody, Speaker};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

const BOT_PREFIX: &str = "concierge›";
const USER_PREFIX: &str = "you›";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub color: bool,
    pub raw: bool,
}

impl Renderer {
    pub fn new(color: bool, raw: bool) -> Self {
        Self { color, raw }
    }

    /// Resolve color auto-detection against stdout
    pub fn from_config(output: &OutputConfig) -> Self {
        let color = match output.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        };
        Self::new(color, output.raw_markup)
    }

    pub fn plain() -> Self {
        Self::new(false, false)
    }

    /// Render a reply body without any prefix
    pub fn render_reply(&self, markup: &str) -> String {
        if self.raw {
            return markup.to_string();
        }
        if !self.color {
            return markup::to_plain_text(markup);
        }

        let mut out = String::new();
        for segment in markup::parse(markup) {
            match segment {
                Segment::Text(text) => out.push_str(&text),
                Segment::Bold(text) => out.push_str(&text.bold().to_string()),
                Segment::Link { label, href } => {
                    out.push_str(&label.cyan().underline().to_string());
                    if label != href {
                        out.push_str(&format!(" ({})", href.dimmed()));
                    }
                }
                Segment::LineBreak => out.push('\n'),
            }
        }
        out
    }

    pub fn render_message(&self, message: &Message) -> String {
        let body = match &message.body {
            MessageBody::Plain(text) => text.clone(),
            MessageBody::Trusted(text) => self.render_reply(text),
        };
        let prefix = match message.speaker {
            Speaker::Bot => BOT_PREFIX,
            Speaker::User => USER_PREFIX,
        };

        if !self.color {
            return format!("{} {}", prefix, body);
        }
        match message.speaker {
            Speaker::Bot => format!("{} {}", prefix.yellow().bold(), body),
            Speaker::User => format!("{} {}", prefix.dimmed(), body),
        }
    }
}
