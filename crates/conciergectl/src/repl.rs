//! REPL - interactive chat with the concierge.
//!
//! Reads one question per line, shows the reply after the session's reply
//! delay. Leave with `/quit`, `/exit` or EOF.

use crate::commands;
use crate::output::Renderer;
use anyhow::Result;
use concierge_shared::session::ChatSession;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

/// What a line of input asks the REPL to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Intents,
    Ask(String),
    Empty,
}

pub fn parse_line(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    match trimmed {
        "" => ReplCommand::Empty,
        "/quit" | "/exit" | "/q" => ReplCommand::Quit,
        "/help" | "/?" => ReplCommand::Help,
        "/intents" | "/topics" => ReplCommand::Intents,
        _ => ReplCommand::Ask(trimmed.to_string()),
    }
}

/// Raw line to text; invalid UTF-8 becomes U+FFFD instead of ending the chat
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let std::borrow::Cow::Owned(_) = line {
        warn!("input line is not valid UTF-8, decoding lossily");
    }
    line.into_owned()
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Ask anything about the restaurant. Commands:")?;
    writeln!(out, "  /intents   list the topics I understand")?;
    writeln!(out, "  /help      show this help")?;
    writeln!(out, "  /quit      leave the chat")?;
    Ok(())
}

/// Run the chat loop until `/quit` or end of input
pub async fn run<R, W>(
    session: &mut ChatSession,
    renderer: &Renderer,
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(welcome) = session.messages().first() {
        writeln!(out, "{}", renderer.render_message(welcome))?;
        writeln!(out)?;
    }

    let mut buf = Vec::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = decode_line(&buf);

        match parse_line(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(out)?,
            ReplCommand::Intents => commands::intents(session.matcher().catalog(), false, out)?,
            ReplCommand::Ask(question) => {
                if let Some(turn) = session.submit(&question).await {
                    writeln!(out, "{}", renderer.render_message(&turn.bot))?;
                    writeln!(out)?;
                }
            }
        }
    }

    debug!(messages = session.messages().len(), "chat ended");
    Ok(())
}
