//! Diagram export of the structural flow graph.

use crate::flow::FlowDefinition;
use ahash::AHashMap;
use std::fmt;

/// Supported diagram notations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagramFormat {
    #[default]
    Mermaid,
}

/// Renders `definition` in the requested notation.
pub fn export(definition: &FlowDefinition, format: DiagramFormat) -> String {
    match format {
        DiagramFormat::Mermaid => MermaidExporter::new(definition).export(),
    }
}

/// Renders a flow as a Mermaid `flowchart TD`.
///
/// Nodes are declared in step order and edges in transition order. Predicates
/// become edge labels. Dangling targets are drawn as-is.
///
/// Step ids made of ASCII letters, digits and single underscores are used as
/// node keys directly. Any other id (spaces, punctuation, the `end` keyword)
/// gets a positional key such as `node__2`; a dangling target of that shape
/// becomes `missing__0` and carries its id as an inline label.
pub struct MermaidExporter<'a> {
    definition: &'a FlowDefinition,
}

impl<'a> MermaidExporter<'a> {
    pub fn new(definition: &'a FlowDefinition) -> Self {
        Self { definition }
    }

    pub fn export(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MermaidExporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = NodeKeys::new(self.definition);

        writeln!(f, "flowchart TD")?;
        for step in self.definition.steps() {
            writeln!(
                f,
                "    {}[\"{}\"]",
                keys.declared(&step.id),
                escape_label(&step.prompt)
            )?;
        }
        for step in self.definition.steps() {
            let source = keys.declared(&step.id).to_string();
            for transition in &step.transitions {
                let target = keys.target(&transition.target);
                match &transition.predicate {
                    Some(predicate) => writeln!(
                        f,
                        "    {} -->|\"{}\"| {}",
                        source,
                        escape_label(&predicate.to_string()),
                        target
                    )?,
                    None => writeln!(f, "    {} --> {}", source, target)?,
                }
            }
        }
        Ok(())
    }
}

/// Mermaid node keys for the steps of one definition.
struct NodeKeys<'a> {
    declared: AHashMap<&'a str, String>,
    missing: AHashMap<&'a str, String>,
}

impl<'a> NodeKeys<'a> {
    fn new(definition: &'a FlowDefinition) -> Self {
        let declared = definition
            .steps()
            .iter()
            .enumerate()
            .map(|(position, step)| {
                let key = if is_plain_key(&step.id) {
                    step.id.clone()
                } else {
                    format!("node__{}", position)
                };
                (step.id.as_str(), key)
            })
            .collect();
        Self {
            declared,
            missing: AHashMap::new(),
        }
    }

    fn declared<'s>(&'s self, id: &'s str) -> &'s str {
        self.declared.get(id).map_or(id, String::as_str)
    }

    /// The edge endpoint for `id`: its key, plus an inline label for dangling ids
    /// that cannot be written as a key.
    fn target(&mut self, id: &'a str) -> String {
        if let Some(key) = self.declared.get(id) {
            return key.clone();
        }
        if is_plain_key(id) {
            return id.to_string();
        }
        let next = self.missing.len();
        let key = self
            .missing
            .entry(id)
            .or_insert_with(|| format!("missing__{}", next));
        format!("{}[\"{}\"]", key, escape_label(id))
    }
}

fn is_plain_key(id: &str) -> bool {
    !id.is_empty()
        && id != "end"
        && !id.contains("__")
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn escape_label(text: &str) -> String {
    text.replace('"', "#quot;")
        .replace("\r\n", "<br/>")
        .replace('\n', "<br/>")
}
