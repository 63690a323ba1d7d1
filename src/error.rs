//! Crate error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while loading inputs or scheduling sessions.
#[derive(Debug, Error)]
pub enum MentoringError {
    /// Rosters or time slots failed precondition checks.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("invalid preference weights: {0}")]
    InvalidWeights(String),

    #[error("invalid session cap: {0} (must be at least 1)")]
    InvalidSessionCap(usize),

    #[error("invalid slot plan: {0}")]
    InvalidSlotPlan(String),

    #[error("invalid time '{0}' (expected e.g. \"11:00 AM\" or \"11:00\")")]
    InvalidTime(String),

    #[error("unsupported roster format for {}: expected .csv, .json or .toml", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize {}: {message}", .path.display())]
    Serialize { path: PathBuf, message: String },
}

impl MentoringError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn serialize(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Serialize {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, MentoringError>;
