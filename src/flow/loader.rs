//! Loading flow definitions from JSON files.
//!
//! The on-disk format is deserialized into the raw structs below and then
//! converted through [`IntoFlow`], so the rest of the crate never sees the
//! authoring format.

use super::{FlowDefinition, IntoFlow, Predicate, Step, StepKind, Transition};
use crate::answer::Answer;
use crate::error::{FlowConversionError, LoadError};
use ahash::AHashMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// --- JSON Deserialization Structs (Input Format Specific) ---

#[derive(Debug, Deserialize)]
pub struct RawFlow {
    pub start: String,
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
pub struct RawStep {
    pub id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    #[serde(alias = "prompt")]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<RawTransition>,
}

#[derive(Debug, Deserialize)]
pub struct RawTransition {
    #[serde(alias = "target")]
    pub to: String,
    #[serde(default, rename = "if", alias = "if_rule")]
    pub condition: Option<RawPredicate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawPredicate {
    Equals { step: String, value: Answer },
    Contains { step: String, value: String },
    All(Vec<RawPredicate>),
    Any(Vec<RawPredicate>),
}

impl From<RawPredicate> for Predicate {
    fn from(raw: RawPredicate) -> Self {
        match raw {
            RawPredicate::Equals { step, value } => Predicate::Equals { step, value },
            RawPredicate::Contains { step, value } => Predicate::Contains { step, value },
            RawPredicate::All(children) => {
                Predicate::All(children.into_iter().map(Predicate::from).collect())
            }
            RawPredicate::Any(children) => {
                Predicate::Any(children.into_iter().map(Predicate::from).collect())
            }
        }
    }
}

impl IntoFlow for RawFlow {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        let steps = self
            .steps
            .into_iter()
            .map(|raw_step| {
                if raw_step.id.trim().is_empty() {
                    return Err(FlowConversionError::ValidationError(
                        "step id must not be empty".to_string(),
                    ));
                }
                Ok(Step {
                    kind: StepKind::from(raw_step.kind.as_str()),
                    prompt: raw_step.question,
                    options: raw_step.options,
                    fields: raw_step.fields,
                    transitions: raw_step
                        .transitions
                        .into_iter()
                        .map(|raw_transition| Transition {
                            target: raw_transition.to,
                            predicate: raw_transition.condition.map(Predicate::from),
                        })
                        .collect(),
                    id: raw_step.id,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FlowDefinition::new(self.start, steps)?)
    }
}

/// Reads flow definitions from `.json` files.
#[derive(Debug, Clone, Default)]
pub struct FlowLoader {
    kind_aliases: AHashMap<String, StepKind>,
}

/// Configures a [`FlowLoader`].
#[derive(Debug, Clone, Default)]
pub struct FlowLoaderBuilder {
    kind_aliases: AHashMap<String, StepKind>,
}

impl FlowLoaderBuilder {
    /// Treats steps of type `user_kind` as the built-in `builtin_kind`.
    /// Aliases pointing at a name that is not a built-in kind are ignored.
    pub fn with_kind_alias(mut self, user_kind: &str, builtin_kind: &str) -> Self {
        if let Some(kind) = StepKind::builtin(builtin_kind) {
            self.kind_aliases.insert(user_kind.to_string(), kind);
        }
        self
    }

    pub fn build(self) -> FlowLoader {
        FlowLoader {
            kind_aliases: self.kind_aliases,
        }
    }
}

impl FlowLoader {
    pub fn builder() -> FlowLoaderBuilder {
        FlowLoaderBuilder::default()
    }

    /// Loads a flow with the default loader.
    pub fn load_path(path: impl AsRef<Path>) -> Result<FlowDefinition, LoadError> {
        FlowLoader::default().load(path)
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<FlowDefinition, LoadError> {
        let path = expand_path(path.as_ref());
        validate_path(&path)?;

        let content = fs::read_to_string(&path).map_err(|e| LoadError::Unreadable {
            path: path.clone(),
            message: e.to_string(),
        })?;
        self.load_str(&content, &path)
    }

    /// Parses flow JSON that was read from `origin`. `origin` is only used in error messages.
    pub fn load_str(&self, content: &str, origin: &Path) -> Result<FlowDefinition, LoadError> {
        let mut raw: RawFlow =
            serde_json::from_str(content).map_err(|e| LoadError::Malformed {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;

        for step in &mut raw.steps {
            if let Some(kind) = self.kind_aliases.get(&step.kind) {
                debug!(step = %step.id, from = %step.kind, to = %kind, "Applying kind alias");
                step.kind = kind.as_str().to_string();
            }
        }

        let flow = raw.into_flow().map_err(|source| LoadError::Definition {
            path: origin.to_path_buf(),
            source,
        })?;

        for (step, read) in flow.unknown_condition_reads() {
            warn!(step, read, "Transition condition reads a step that is not in the flow");
        }

        info!(
            path = %origin.display(),
            start = flow.start(),
            steps = flow.len(),
            "Loaded flow definition"
        );
        Ok(flow)
    }
}

/// Resolves a leading `~` to the home directory, then makes the path absolute.
fn expand_path(path: &Path) -> PathBuf {
    let path = match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    };
    std::path::absolute(&path).unwrap_or(path)
}

fn validate_path(path: &Path) -> Result<(), LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    if !path.is_file() || !is_json {
        return Err(LoadError::WrongKind(path.to_path_buf()));
    }
    Ok(())
}
