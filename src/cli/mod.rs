//! Command-line glue: answer providers, terminal output, and the four commands.

pub mod commands;
pub mod display;
pub mod renderer;

pub use commands::*;
pub use renderer::{AnswerProvider, ScriptedAnswers, TerminalRenderer};

use crate::error::{FlowError, LoadError};
use thiserror::Error;

/// Version of the command-line tool.
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors surfaced by the CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No answer provided for step '{0}'")]
    MissingAnswer(String),

    #[error("Flow definition has {errors} error(s)")]
    InvalidFlow { errors: usize },
}

impl CliError {
    /// The message shown to the user, or `None` when the command already reported the problem.
    pub fn user_message(&self) -> Option<String> {
        match self {
            CliError::Flow(e) => Some(format!("Engine error: {}", e)),
            CliError::InvalidFlow { .. } => None,
            other => Some(format!("Error: {}", other)),
        }
    }
}
