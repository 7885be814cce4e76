//! Concierge Control - ask the restaurant concierge from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use concierge_shared::session::ChatSession;
use conciergectl::commands::{self, AppContext, Overrides};
use conciergectl::{logging, repl};
use std::io;
use std::path::PathBuf;

// Version is embedded at build time
const VERSION: &str = env!("CONCIERGE_VERSION");

#[derive(Parser)]
#[command(name = "conciergectl")]
#[command(about = "Concierge - answers questions about the restaurant", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// TOML knowledge base replacing the built-in content
    #[arg(long, global = true, value_name = "PATH")]
    knowledge: Option<PathBuf>,

    /// Delay before each chat reply, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Print reply markup as-is
    #[arg(long, global = true)]
    raw: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        /// The question, e.g. "when are you open"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Start an interactive chat (default)
    Chat,

    /// List the topics the concierge understands
    Intents {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the active knowledge base as TOML
    Knowledge,

    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let overrides = Overrides {
        knowledge: cli.knowledge,
        delay_ms: cli.delay_ms,
        raw: cli.raw,
        no_color: cli.no_color,
    };
    let ctx = AppContext::load(&overrides)?;
    let mut stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Ask { question } => commands::ask(&ctx, &question.join(" "), &mut stdout),
        Commands::Chat => {
            let mut session =
                ChatSession::new(ctx.matcher.clone()).with_reply_delay(ctx.config.reply_delay());
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repl::run(&mut session, &ctx.renderer, stdin, &mut stdout).await
        }
        Commands::Intents { json } => commands::intents(ctx.matcher.catalog(), json, &mut stdout),
        Commands::Knowledge => commands::knowledge(&ctx, &mut stdout),
        Commands::Config => commands::config(&ctx, &mut stdout),
    }
}
