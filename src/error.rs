//! Error types for morning-routine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the morning-routine application
#[derive(Debug, Error)]
pub enum RoutineError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Checklist entry {index} does not exist (checklist has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("Affirmation pool is empty")]
    EmptyAffirmationPool,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RoutineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RoutineError::ConfigNotFound(_) => 2,
            RoutineError::Config(_) | RoutineError::EmptyAffirmationPool => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RoutineError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset MORNING_ROUTINE_CONFIG to use the built-in routine",
                    path.display()
                )
            }
            RoutineError::EmptyAffirmationPool => {
                "Affirmation pool is empty\n\n\
                Add at least one entry to 'affirmations' in your config, e.g.:\n\
                affirmations = [\"Každý malý krok se počítá.\"]"
                    .to_string()
            }
            RoutineError::Config(msg) => {
                if msg.contains("blank") || msg.contains("empty") {
                    format!(
                        "{}\n\n\
                        Valid keys: title, checklist, affirmations\n\
                        Lists must contain at least one non-blank string",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RoutineError
pub type Result<T> = std::result::Result<T, RoutineError>;
