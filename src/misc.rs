use std::{path::PathBuf, str::FromStr};

use crate::graph::GraphKind;

pub const DEFAULT_GRAPH_FILE: &str = "grafo.txt";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown log level {0:?}, use one of trace, debug, info, warn, error")]
pub struct LogLevelError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Warn
    }
}

impl FromStr for LogLevel {
    type Err = LogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LogLevelError(s.to_string())),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// File the shell loads from, saves to and dumps.
    pub graph_file: PathBuf,
    /// Save after every successful change.
    pub autosave: bool,
    /// Start with an empty graph of this kind if the graph file doesn't exist.
    pub new_kind: Option<GraphKind>,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            graph_file: PathBuf::from(DEFAULT_GRAPH_FILE),
            autosave: false,
            new_kind: None,
            log_level: LogLevel::default(),
        }
    }
}
