use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level failures of the terminal application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown theme {name:?} (available: {available})")]
    UnknownTheme { name: String, available: String },
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Logger setup failures. Never fatal: the game runs without a log file.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot create log file {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("logger already installed: {0}")]
    Install(#[from] log::SetLoggerError),
}
