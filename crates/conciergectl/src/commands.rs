//! Command implementations for conciergectl.

use crate::output::Renderer;
use anyhow::{Context, Result};
use concierge_shared::config::{ColorMode, ConciergeConfig};
use concierge_shared::intents::IntentCatalog;
use concierge_shared::matcher::Matcher;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Command-line values that override the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub knowledge: Option<PathBuf>,
    pub delay_ms: Option<u64>,
    pub raw: bool,
    pub no_color: bool,
}

/// Apply command-line overrides on top of the loaded config
pub fn apply_overrides(mut config: ConciergeConfig, overrides: &Overrides) -> ConciergeConfig {
    if let Some(path) = &overrides.knowledge {
        config.chat.knowledge_path = Some(path.clone());
    }
    if let Some(ms) = overrides.delay_ms {
        config.chat.reply_delay_ms = ms;
    }
    if overrides.raw {
        config.output.raw_markup = true;
    }
    if overrides.no_color {
        config.output.color = ColorMode::Never;
    }
    config
}

/// Everything a command needs, resolved once at startup
pub struct AppContext {
    pub config: ConciergeConfig,
    pub source: Option<PathBuf>,
    pub matcher: Matcher,
    pub renderer: Renderer,
}

impl AppContext {
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let (config, source) = ConciergeConfig::load().context("Failed to load configuration")?;
        Self::from_config(config, source, overrides)
    }

    pub fn from_config(
        config: ConciergeConfig,
        source: Option<PathBuf>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let config = apply_overrides(config, overrides);
        let knowledge = config.load_knowledge().with_context(|| {
            match &config.chat.knowledge_path {
                Some(path) => format!("Failed to load knowledge base {}", path.display()),
                None => "Built-in knowledge base is invalid".to_string(),
            }
        })?;
        info!(
            restaurant = %knowledge.restaurant.name,
            config = ?source,
            "concierge ready"
        );

        let renderer = Renderer::from_config(&config.output);
        let matcher = Matcher::new(IntentCatalog::builtin(), knowledge);
        Ok(Self {
            config,
            source,
            matcher,
            renderer,
        })
    }
}

/// One question, one reply
pub fn ask<W: Write>(ctx: &AppContext, question: &str, out: &mut W) -> Result<()> {
    let reply = ctx.matcher.respond(question);
    writeln!(out, "{}", ctx.renderer.render_reply(&reply))?;
    Ok(())
}

/// List catalog rules in matching order
pub fn intents<W: Write>(catalog: &IntentCatalog, json: bool, out: &mut W) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(catalog.rules())
            .context("Failed to serialize intent catalog")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    for (idx, rule) in catalog.rules().iter().enumerate() {
        writeln!(out, "{:>2}. {:<16} {}", idx + 1, rule.kind, rule.patterns.join(", "))?;
    }
    Ok(())
}

/// Dump the active knowledge base as TOML
pub fn knowledge<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    let text = ctx
        .matcher
        .knowledge()
        .to_toml_string()
        .context("Failed to serialize knowledge base")?;
    write!(out, "{}", text)?;
    Ok(())
}

/// Show where configuration came from and its resolved values
pub fn config<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    let source = ctx
        .source
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());
    writeln!(out, "# source: {}", source)?;
    let text = ctx
        .config
        .to_toml_string()
        .context("Failed to serialize configuration")?;
    write!(out, "{}", text)?;
    Ok(())
}
