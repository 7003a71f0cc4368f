//! Common test utilities for building flow definitions and fixtures.
use flowengine::prelude::*;
use std::path::PathBuf;

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The six-step tax intake flow, built in code.
///
/// greeting -> income_info -> business_details -> summary
///          -> estimate -> summary
///          -> info
#[allow(dead_code)]
pub fn create_intake_flow() -> FlowDefinition {
    FlowDefinition::builder("greeting")
        .step(
            Step::new("greeting", StepKind::SingleSelect, "What would you like to do?")
                .options(["FileReturn", "GetEstimate", "LearnMore"])
                .transition_if("income_info", Predicate::equals("greeting", "FileReturn"))
                .transition_if("estimate", Predicate::equals("greeting", "GetEstimate"))
                .transition("info"),
        )
        .step(
            Step::new("income_info", StepKind::MultiSelect, "Select your income types:")
                .options(["W2", "1099", "Business", "Investment"])
                .transition_if(
                    "business_details",
                    Predicate::contains("income_info", "Business"),
                )
                .transition("summary"),
        )
        .step(
            Step::new("business_details", StepKind::NumberMatrix, "How many businesses?")
                .fields(["LLC", "SCorp", "CCorp"])
                .transition("summary"),
        )
        .step(
            Step::new(
                "estimate",
                StepKind::Text,
                "Describe your tax situation briefly:",
            )
            .transition("summary"),
        )
        .step(Step::new(
            "info",
            StepKind::Display,
            "Visit our website for more information.",
        ))
        .step(Step::new(
            "summary",
            StepKind::Display,
            "Thank you for completing the intake!",
        ))
        .build()
        .expect("intake flow is well formed")
}

/// A linear flow `step_a -> step_b` plus an `orphan` step nothing points at.
#[allow(dead_code)]
pub fn create_orphan_flow() -> FlowDefinition {
    FlowDefinition::builder("step_a")
        .step(Step::new("step_a", StepKind::Text, "First step").transition("step_b"))
        .step(Step::new("step_b", StepKind::Text, "Second step"))
        .step(Step::new("orphan", StepKind::Text, "I am unreachable"))
        .build()
        .expect("orphan flow is well formed")
}

/// Drives `engine` to completion, taking answers from `script` by step id.
/// Display steps not in the script are answered with `Null`.
#[allow(dead_code)]
pub fn run_with(engine: &mut Engine<'_>, script: &[(&str, Answer)]) -> std::result::Result<(), FlowError> {
    while !engine.finished() {
        let step = engine.current_step()?;
        let value = script
            .iter()
            .find(|(id, _)| *id == step.id)
            .map(|(_, answer)| answer.clone())
            .unwrap_or(Answer::Null);
        engine.answer(value)?;
    }
    Ok(())
}
