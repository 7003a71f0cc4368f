use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the flow graph model and the execution engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("{}", unknown_step_message(.step_id, .referenced_from.as_deref()))]
    UnknownStep {
        step_id: String,
        referenced_from: Option<String>,
    },

    #[error("Invalid engine state: {0}")]
    InvalidState(String),

    #[error("Step '{0}' is defined more than once")]
    DuplicateStep(String),
}

fn unknown_step_message(step_id: &str, referenced_from: Option<&str>) -> String {
    match referenced_from {
        Some(source) => format!(
            "Step '{}' not found, which is required by a transition from step '{}'",
            step_id, source
        ),
        None => format!("Step '{}' not found in the flow definition", step_id),
    }
}

/// Errors that can occur while loading a flow definition from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a .json file: {}", .0.display())]
    WrongKind(PathBuf),

    #[error("Could not read '{}': {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("Syntax error in {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("Invalid flow definition in {}: {source}", .path.display())]
    Definition {
        path: PathBuf,
        #[source]
        source: FlowConversionError,
    },
}

/// Errors that can occur when converting a custom authoring format into a `FlowDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Flow(#[from] FlowError),
}
