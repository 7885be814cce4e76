//! Conciergectl library - exposes modules for testing

pub mod commands;
pub mod logging;
pub mod output;
pub mod repl;
