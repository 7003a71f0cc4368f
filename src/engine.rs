use crate::answer::{Answer, Answers};
use crate::error::FlowError;
use crate::evaluator;
use crate::flow::{FlowDefinition, Step};
use tracing::{debug, info, warn};

/// Where an engine is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, no step answered yet.
    Pending,
    /// At least one step answered and another is waiting.
    Running,
    /// No further step can be resolved.
    Finished,
}

/// Drives one run of a flow, one answered step at a time.
///
/// The engine never asks questions itself. Callers loop while
/// [`Engine::finished`] is false, render [`Engine::current_step`], and pass
/// the respondent's value to [`Engine::answer`]:
///
/// ```rust
/// use flowengine::prelude::*;
///
/// let flow = FlowDefinition::builder("name")
///     .step(Step::new("name", StepKind::Text, "Your name?").transition("bye"))
///     .step(Step::new("bye", StepKind::Display, "Thanks!"))
///     .build()?;
///
/// let mut engine = Engine::new(&flow)?;
/// while !engine.finished() {
///     let value = match engine.current_step()?.kind {
///         StepKind::Display => Answer::Null,
///         _ => Answer::text("Ada"),
///     };
///     engine.answer(value)?;
/// }
/// assert_eq!(engine.history(), ["name", "bye"]);
/// # Ok::<(), FlowError>(())
/// ```
#[derive(Debug)]
pub struct Engine<'a> {
    definition: &'a FlowDefinition,
    current: Option<String>,
    history: Vec<String>,
    answers: Answers,
}

impl<'a> Engine<'a> {
    /// Binds a new run to `definition`. Fails if the start step does not exist.
    pub fn new(definition: &'a FlowDefinition) -> Result<Self, FlowError> {
        let start = definition.step(definition.start())?;
        Ok(Self {
            definition,
            current: Some(start.id.clone()),
            history: Vec::new(),
            answers: Answers::new(),
        })
    }

    pub fn finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn phase(&self) -> Phase {
        match (&self.current, self.history.is_empty()) {
            (None, _) => Phase::Finished,
            (Some(_), true) => Phase::Pending,
            (Some(_), false) => Phase::Running,
        }
    }

    pub fn current_step_id(&self) -> Result<&str, FlowError> {
        self.current
            .as_deref()
            .ok_or_else(|| FlowError::InvalidState("the flow has already finished".to_string()))
    }

    pub fn current_step(&self) -> Result<&'a Step, FlowError> {
        let id = self.current_step_id()?;
        self.definition.step(id)
    }

    /// Records `value` for the current step and advances to the next one.
    ///
    /// `Null` answers (display steps) are added to the history but not to the answers.
    /// A transition into a step missing from the definition stops the run with
    /// [`FlowError::UnknownStep`].
    pub fn answer(&mut self, value: Answer) -> Result<(), FlowError> {
        let step = self.current_step()?;

        if !value.is_null() {
            self.answers.insert(step.id.clone(), value);
        }
        self.history.push(step.id.clone());

        let Some(transition) = evaluator::first_match(&step.transitions, &self.answers) else {
            info!(
                step = %step.id,
                terminal = step.is_terminal(),
                steps_completed = self.history.len(),
                "Flow finished"
            );
            self.current = None;
            return Ok(());
        };

        if !self.definition.contains(&transition.target) {
            warn!(
                step = %step.id,
                target = %transition.target,
                "Transition to unknown step"
            );
            self.current = None;
            return Err(FlowError::UnknownStep {
                step_id: transition.target.clone(),
                referenced_from: Some(step.id.clone()),
            });
        }

        debug!(from = %step.id, to = %transition.target, "Transition taken");
        self.current = Some(transition.target.clone());
        Ok(())
    }

    /// Step ids answered so far, in visitation order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }
}
