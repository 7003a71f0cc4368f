//! # flowengine - Declarative Flow Graphs for Interactive Wizards
//!
//! **flowengine** runs question-and-answer wizards described as a directed
//! graph of steps. Each step asks one question; its outgoing transitions carry
//! optional predicates over the answers collected so far, and the first
//! transition whose predicate holds decides where the wizard goes next.
//!
//! ## Core Workflow
//!
//! 1.  **Load or Build a Flow**: Read a JSON flow file with [`flow::FlowLoader`],
//!     convert your own format through the [`flow::IntoFlow`] trait, or build one
//!     in code with [`flow::FlowDefinition::builder`].
//! 2.  **Validate** (optional): [`validator::validate`] reports missing start
//!     steps, dangling transitions and unreachable steps as data.
//! 3.  **Run**: Create an [`engine::Engine`] and feed it one answer per step until
//!     it reports that it has finished.
//! 4.  **Export**: [`graph::MermaidExporter`] renders the structural graph as a
//!     Mermaid flowchart.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowengine::prelude::*;
//!
//! let flow = FlowDefinition::builder("greeting")
//!     .step(
//!         Step::new("greeting", StepKind::SingleSelect, "What would you like to do?")
//!             .options(["FileReturn", "LearnMore"])
//!             .transition_if("income", Predicate::equals("greeting", "FileReturn"))
//!             .transition("info"),
//!     )
//!     .step(
//!         Step::new("income", StepKind::MultiSelect, "Select your income types:")
//!             .options(["W2", "Business"]),
//!     )
//!     .step(Step::new("info", StepKind::Display, "Visit our website."))
//!     .build()?;
//!
//! assert!(validate(&flow).is_empty());
//!
//! let mut engine = Engine::new(&flow)?;
//! engine.answer(Answer::text("FileReturn"))?;
//! engine.answer(Answer::choices(["W2"]))?;
//!
//! assert!(engine.finished());
//! assert_eq!(engine.history(), ["greeting", "income"]);
//! println!("{}", MermaidExporter::new(&flow).export());
//! # Ok::<(), FlowError>(())
//! ```

pub mod answer;
#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod flow;
pub mod graph;
pub mod prelude;
pub mod validator;

/// Version of the flow engine library.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
