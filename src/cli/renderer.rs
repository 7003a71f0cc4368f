use super::CliError;
use crate::answer::{Answer, FieldCounts};
use crate::flow::{Step, StepKind};
use ahash::AHashMap;
use dialoguer::console::Term;
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Supplies the answer for a step. The returned shape must match the step kind.
pub trait AnswerProvider {
    fn ask(&mut self, step: &Step) -> Result<Answer, CliError>;
}

/// Asks questions on the terminal.
///
/// Dispatch is by step kind; unknown kinds, and select steps without options,
/// are asked as free text.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    term: Term,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_term(Term::stderr())
    }

    /// Uses `term` for display steps instead of stderr.
    pub fn with_term(term: Term) -> Self {
        Self { term }
    }

    fn render_single_select(&self, step: &Step) -> Result<Answer, CliError> {
        let selection = Select::new()
            .with_prompt(&step.prompt)
            .items(step.options.as_slice())
            .default(0)
            .interact()?;
        Ok(Answer::Text(step.options[selection].clone()))
    }

    fn render_multi_select(&self, step: &Step) -> Result<Answer, CliError> {
        loop {
            let selection = MultiSelect::new()
                .with_prompt(&step.prompt)
                .items(step.options.as_slice())
                .interact()?;
            if selection.is_empty() {
                eprintln!("  Select at least one option.");
                continue;
            }
            return Ok(Answer::Choices(
                selection
                    .into_iter()
                    .map(|i| step.options[i].clone())
                    .collect(),
            ));
        }
    }

    fn render_number_matrix(&self, step: &Step) -> Result<Answer, CliError> {
        println!("\n{}\n", step.prompt);
        let mut counts = FieldCounts::new();
        for field in &step.fields {
            let count: i64 = Input::new()
                .with_prompt(format!("  {}", field))
                .default(0)
                .interact_text()?;
            counts.insert(field.clone(), count);
        }
        Ok(Answer::Matrix(counts))
    }

    fn render_text(&self, step: &Step) -> Result<Answer, CliError> {
        let text: String = Input::new().with_prompt(&step.prompt).interact_text()?;
        Ok(Answer::Text(text))
    }

    fn render_number(&self, step: &Step) -> Result<Answer, CliError> {
        let number: i64 = Input::new().with_prompt(&step.prompt).interact_text()?;
        Ok(Answer::Number(number))
    }

    fn render_boolean(&self, step: &Step) -> Result<Answer, CliError> {
        let confirmed = Confirm::new().with_prompt(&step.prompt).interact()?;
        Ok(Answer::Bool(confirmed))
    }

    fn render_display(&self, step: &Step) -> Result<Answer, CliError> {
        self.term.write_line(&format!("\n{}\n", step.prompt))?;
        self.term.write_line("Press any key to continue...")?;
        self.term.read_key()?;
        Ok(Answer::Null)
    }
}

impl AnswerProvider for TerminalRenderer {
    fn ask(&mut self, step: &Step) -> Result<Answer, CliError> {
        match step.kind {
            StepKind::SingleSelect if !step.options.is_empty() => self.render_single_select(step),
            StepKind::MultiSelect if !step.options.is_empty() => self.render_multi_select(step),
            StepKind::NumberMatrix => self.render_number_matrix(step),
            StepKind::Number => self.render_number(step),
            StepKind::Boolean => self.render_boolean(step),
            StepKind::Display => self.render_display(step),
            _ => self.render_text(step),
        }
    }
}

/// Answers recorded ahead of time, keyed by step id.
///
/// Display steps without a recorded answer resolve to `Null`; any other
/// missing step is an error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: AHashMap<String, Answer>,
    asked: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, step_id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.answers.insert(step_id.into(), answer.into());
        self
    }

    /// Step ids in the order they were asked.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl AnswerProvider for ScriptedAnswers {
    fn ask(&mut self, step: &Step) -> Result<Answer, CliError> {
        self.asked.push(step.id.clone());
        match (self.answers.get(&step.id), &step.kind) {
            (Some(answer), _) => Ok(answer.clone()),
            (None, StepKind::Display) => Ok(Answer::Null),
            (None, _) => Err(CliError::MissingAnswer(step.id.clone())),
        }
    }
}
