//! Trusted markup subset used in bot replies.
//!
//! Replies may contain `<strong>`, `<br>`, anchors and plain newlines. All
//! of it is produced by responders from knowledge base values, never from
//! user input. User text goes through [`escape_html`] instead.

use regex::Regex;
use std::sync::OnceLock;

/// Line break tag
pub const BR: &str = "<br>";

/// Escape text so it can never be interpreted as markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn strong(text: &str) -> String {
    format!("<strong>{}</strong>", text)
}

/// Anchor opening in a new tab
pub fn link(href: &str, label: &str) -> String {
    format!(r#"<a href="{}" target="_blank">{}</a>"#, href, label)
}

/// Anchor to a page on the restaurant site, same tab
pub fn page_link(href: &str, label: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, href, label)
}

pub fn tel_link(phone: &str) -> String {
    format!(r#"<a href="tel:{}">{}</a>"#, phone, phone)
}

pub fn mailto_link(email: &str) -> String {
    format!(r#"<a href="mailto:{}">{}</a>"#, email, email)
}

/// A piece of parsed markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bold(String),
    Link { label: String, href: String },
    LineBreak,
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r#"(?is)<br\s*/?>|<strong>(.*?)</strong>|<a\s[^>]*?href="([^"]*)"[^>]*>(.*?)</a>|\n"#)
            .expect("markup token regex is valid")
    })
}

/// Split trusted markup into segments.
///
/// Tags outside the supported subset are kept as literal text.
pub fn parse(markup: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in token_regex().captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            segments.push(Segment::Text(markup[last..whole.start()].to_string()));
        }

        if let Some(bold) = caps.get(1) {
            segments.push(Segment::Bold(bold.as_str().to_string()));
        } else if let (Some(href), Some(label)) = (caps.get(2), caps.get(3)) {
            segments.push(Segment::Link {
                label: label.as_str().to_string(),
                href: href.as_str().to_string(),
            });
        } else {
            segments.push(Segment::LineBreak);
        }

        last = whole.end();
    }

    if last < markup.len() {
        segments.push(Segment::Text(markup[last..].to_string()));
    }

    segments
}

/// Render trusted markup as plain text for terminals and logs
pub fn to_plain_text(markup: &str) -> String {
    let mut out = String::new();
    for segment in parse(markup) {
        match segment {
            Segment::Text(text) | Segment::Bold(text) => out.push_str(&text),
            Segment::Link { label, href } => {
                if label == href {
                    out.push_str(&label);
                } else {
                    out.push_str(&format!("{} ({})", label, href));
                }
            }
            Segment::LineBreak => out.push('\n'),
        }
    }
    out
}
