use super::Predicate;
use crate::error::FlowError;
use ahash::AHashMap;
use std::fmt;

/// The kind of question a step asks. Unknown kinds are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StepKind {
    SingleSelect,
    MultiSelect,
    NumberMatrix,
    Text,
    Number,
    Boolean,
    Display,
    Other(String),
}

impl StepKind {
    pub fn as_str(&self) -> &str {
        match self {
            StepKind::SingleSelect => "single_select",
            StepKind::MultiSelect => "multi_select",
            StepKind::NumberMatrix => "number_matrix",
            StepKind::Text => "text",
            StepKind::Number => "number",
            StepKind::Boolean => "boolean",
            StepKind::Display => "display",
            StepKind::Other(name) => name,
        }
    }

    /// Maps a built-in kind name to its variant. Returns `None` for unrecognized names.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "single_select" => Some(StepKind::SingleSelect),
            "multi_select" => Some(StepKind::MultiSelect),
            "number_matrix" => Some(StepKind::NumberMatrix),
            "text" => Some(StepKind::Text),
            "number" => Some(StepKind::Number),
            "boolean" => Some(StepKind::Boolean),
            "display" => Some(StepKind::Display),
            _ => None,
        }
    }
}

impl From<&str> for StepKind {
    fn from(name: &str) -> Self {
        StepKind::builtin(name).unwrap_or_else(|| StepKind::Other(name.to_string()))
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge to another step, optionally guarded by a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub target: String,
    /// `None` means the transition always applies.
    pub predicate: Option<Predicate>,
}

impl Transition {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            predicate: None,
        }
    }

    pub fn when(target: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            target: target.into(),
            predicate: Some(predicate),
        }
    }

    pub fn is_unconditional(&self) -> bool {
        self.predicate.is_none()
    }
}

/// A single question node in the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: String,
    pub kind: StepKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub fields: Vec<String>,
    pub transitions: Vec<Transition>,
}

impl Step {
    pub fn new(id: impl Into<String>, kind: impl Into<StepKind>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            prompt: prompt.into(),
            options: Vec::new(),
            fields: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Appends an unconditional transition. Declare it last so it acts as the default branch.
    pub fn transition(mut self, target: impl Into<String>) -> Self {
        self.transitions.push(Transition::to(target));
        self
    }

    pub fn transition_if(mut self, target: impl Into<String>, predicate: Predicate) -> Self {
        self.transitions.push(Transition::when(target, predicate));
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// The complete, immutable flow graph: an entry step and the steps in declaration order.
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    start: String,
    steps: Vec<Step>,
    index: AHashMap<String, usize>,
}

impl FlowDefinition {
    /// Builds a definition, rejecting duplicate step ids.
    ///
    /// The start id and transition targets are not checked here; see
    /// [`crate::validator`] for structural checks.
    pub fn new(start: impl Into<String>, steps: Vec<Step>) -> Result<Self, FlowError> {
        let mut index = AHashMap::with_capacity(steps.len());
        for (position, step) in steps.iter().enumerate() {
            if index.insert(step.id.clone(), position).is_some() {
                return Err(FlowError::DuplicateStep(step.id.clone()));
            }
        }
        Ok(Self {
            start: start.into(),
            steps,
            index,
        })
    }

    pub fn builder(start: impl Into<String>) -> FlowBuilder {
        FlowBuilder::new(start)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn step(&self, id: &str) -> Result<&Step, FlowError> {
        self.get(id).ok_or_else(|| FlowError::UnknownStep {
            step_id: id.to_string(),
            referenced_from: None,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Step> {
        self.index.get(id).map(|&position| &self.steps[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Step ids in declaration order.
    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Pairs of `(step, read)` where a transition condition on `step` reads the
    /// answer of `read`, a step that is not part of this definition. Such a
    /// condition can never be true.
    pub fn unknown_condition_reads(&self) -> Vec<(&str, &str)> {
        let mut found = Vec::new();
        for step in &self.steps {
            for predicate in step.transitions.iter().filter_map(|t| t.predicate.as_ref()) {
                let mut reads = Vec::new();
                predicate.referenced_steps(&mut reads);
                found.extend(
                    reads
                        .into_iter()
                        .filter(|read| !self.contains(read))
                        .map(|read| (step.id.as_str(), read)),
                );
            }
        }
        found
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Fluent construction of a [`FlowDefinition`].
#[derive(Debug, Clone)]
pub struct FlowBuilder {
    start: String,
    steps: Vec<Step>,
}

impl FlowBuilder {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn build(self) -> Result<FlowDefinition, FlowError> {
        FlowDefinition::new(self.start, self.steps)
    }
}
