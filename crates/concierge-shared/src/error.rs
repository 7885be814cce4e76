//! Error types for Concierge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConciergeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("Intent catalog error: {0}")]
    Catalog(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ConciergeError>;
