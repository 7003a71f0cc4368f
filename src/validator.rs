//! Static checks over a flow definition.
//!
//! Each check reports its findings as [`Diagnostic`] values and never fails;
//! the caller decides which findings are fatal.

use crate::flow::{FlowDefinition, Step};
use ahash::AHashSet;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// A structural problem found in a flow definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingStartStep {
        start: String,
    },
    UnknownTransitionTarget {
        step: String,
        target: String,
    },
    UnreachableStep {
        step: String,
        start: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingStartStep { start } => {
                write!(f, "Start step '{}' not found in steps", start)
            }
            Diagnostic::UnknownTransitionTarget { step, target } => {
                write!(f, "Step '{}' has transition to unknown step '{}'", step, target)
            }
            Diagnostic::UnreachableStep { step, start } => {
                write!(f, "Step '{}' is unreachable from start step '{}'", step, start)
            }
        }
    }
}

/// Runs every check in order: start step, transition targets, reachability.
pub fn validate(definition: &FlowDefinition) -> Vec<Diagnostic> {
    let mut diagnostics = check_start_step(definition);
    diagnostics.extend(check_transition_targets(definition));
    diagnostics.extend(check_reachability(definition));
    debug!(count = diagnostics.len(), "Validation finished");
    diagnostics
}

pub fn check_start_step(definition: &FlowDefinition) -> Vec<Diagnostic> {
    if definition.contains(definition.start()) {
        Vec::new()
    } else {
        vec![Diagnostic::MissingStartStep {
            start: definition.start().to_string(),
        }]
    }
}

pub fn check_transition_targets(definition: &FlowDefinition) -> Vec<Diagnostic> {
    definition
        .steps()
        .iter()
        .flat_map(|step| {
            step.transitions
                .iter()
                .filter(|t| !definition.contains(&t.target))
                .map(|t| Diagnostic::UnknownTransitionTarget {
                    step: step.id.clone(),
                    target: t.target.clone(),
                })
        })
        .collect()
}

pub fn check_reachability(definition: &FlowDefinition) -> Vec<Diagnostic> {
    let reachable = reachable_steps(definition);
    definition
        .steps()
        .iter()
        .filter(|step| !reachable.contains(step.id.as_str()))
        .map(|step| Diagnostic::UnreachableStep {
            step: step.id.clone(),
            start: definition.start().to_string(),
        })
        .collect()
}

/// Breadth-first search from the start step over every transition whose target exists.
/// Predicates are ignored: any transition could fire under some sequence of answers.
pub fn reachable_steps(definition: &FlowDefinition) -> AHashSet<&str> {
    let mut visited = AHashSet::new();
    let mut queue: VecDeque<&Step> = definition.get(definition.start()).into_iter().collect();

    while let Some(step) = queue.pop_front() {
        if !visited.insert(step.id.as_str()) {
            continue;
        }
        queue.extend(
            step.transitions
                .iter()
                .filter_map(|t| definition.get(&t.target))
                .filter(|next| !visited.contains(next.id.as_str())),
        );
    }
    visited
}
