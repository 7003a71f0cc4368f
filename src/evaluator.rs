//! Pure evaluation of transition predicates against collected answers.

use crate::answer::Answers;
use crate::flow::{Predicate, Transition};

/// Evaluates `predicate` against `answers`.
///
/// A predicate that reads a step with no recorded answer is false, so guards
/// on branches that were never visited need no extra checks.
pub fn evaluate(predicate: &Predicate, answers: &Answers) -> bool {
    match predicate {
        Predicate::Equals { step, value } => answers.get(step).is_some_and(|answer| answer == value),
        Predicate::Contains { step, value } => answers
            .get(step)
            .and_then(|answer| answer.as_choices())
            .is_some_and(|choices| choices.iter().any(|choice| choice == value)),
        Predicate::All(children) => children.iter().all(|child| evaluate(child, answers)),
        Predicate::Any(children) => children.iter().any(|child| evaluate(child, answers)),
    }
}

/// Whether `transition` applies. Transitions without a predicate always apply.
pub fn applies(transition: &Transition, answers: &Answers) -> bool {
    transition
        .predicate
        .as_ref()
        .is_none_or(|predicate| evaluate(predicate, answers))
}

/// Returns the first transition in declaration order that applies.
pub fn first_match<'a>(transitions: &'a [Transition], answers: &Answers) -> Option<&'a Transition> {
    transitions.iter().find(|t| applies(t, answers))
}
