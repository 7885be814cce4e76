//! Concierge configuration.
//!
//! Config file lookup order:
//! 1. `$CONCIERGE_CONFIG` (explicit override, must exist)
//! 2. `~/.config/concierge/config.toml`
//! 3. `/etc/concierge/config.toml`
//! 4. Defaults

use crate::error::{ConciergeError, Result};
use crate::knowledge::KnowledgeBase;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Env var naming an explicit config file
pub const CONFIG_ENV: &str = "CONCIERGE_CONFIG";

/// System-wide config path
pub const SYSTEM_CONFIG_PATH: &str = "/etc/concierge/config.toml";

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = ConciergeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "on" | "yes" | "true" => Ok(Self::Always),
            "never" | "off" | "none" | "no" | "false" => Ok(Self::Never),
            _ => Err(ConciergeError::Config(format!(
                "Invalid color mode: '{}'. Valid values: auto, always, never",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Cosmetic delay before each reply
    pub reply_delay_ms: u64,

    /// TOML knowledge base replacing the built-in content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_path: Option<PathBuf>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 400,
            knowledge_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorMode,

    /// Print reply markup as-is instead of rendering it
    pub raw_markup: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConciergeConfig {
    pub chat: ChatConfig,
    pub output: OutputConfig,
}

impl ConciergeConfig {
    /// `~/.config/concierge/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("concierge").join("config.toml"))
    }

    pub fn system_config_path() -> PathBuf {
        PathBuf::from(SYSTEM_CONFIG_PATH)
    }

    /// Load using the standard lookup order.
    ///
    /// Returns the config and the file it came from (`None` for defaults).
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(explicit);
            let config = Self::load_from(&path)?;
            return Ok((config, Some(path)));
        }

        let mut candidates = Vec::new();
        if let Some(user) = Self::user_config_path() {
            candidates.push(user);
        }
        candidates.push(Self::system_config_path());

        Self::load_first(&candidates)
    }

    /// Load the first existing file among `candidates`, else defaults
    pub fn load_first(candidates: &[PathBuf]) -> Result<(Self, Option<PathBuf>)> {
        for path in candidates {
            if path.exists() {
                let config = Self::load_from(path)?;
                return Ok((config, Some(path.clone())));
            }
        }
        debug!("no config file found, using defaults");
        Ok((Self::default(), None))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ConciergeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: ConciergeConfig = toml::from_str(&contents)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat.reply_delay_ms)
    }

    /// Configured knowledge base, or the built-in one
    pub fn load_knowledge(&self) -> Result<KnowledgeBase> {
        match &self.chat.knowledge_path {
            Some(path) => KnowledgeBase::load(path),
            None => Ok(KnowledgeBase::builtin()),
        }
    }
}
