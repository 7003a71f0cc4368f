//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! flowengine crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowengine::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let flow = FlowLoader::load_path("flows/intake.json")?;
//!
//! for diagnostic in validate(&flow) {
//!     eprintln!("{}", diagnostic);
//! }
//!
//! let mut engine = Engine::new(&flow)?;
//! while !engine.finished() {
//!     let step = engine.current_step()?;
//!     println!("{}", step.prompt);
//!     engine.answer(Answer::text("..."))?;
//! }
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::flow::{
    FlowBuilder, FlowDefinition, FlowLoader, IntoFlow, Predicate, Step, StepKind, Transition,
};

// Answers
pub use crate::answer::{Answer, Answers, FieldCounts};

// Execution, validation and export
pub use crate::engine::{Engine, Phase};
pub use crate::evaluator::evaluate;
pub use crate::graph::{DiagramFormat, MermaidExporter};
pub use crate::validator::{Diagnostic, validate};

// Error types
pub use crate::error::{FlowConversionError, FlowError, LoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
