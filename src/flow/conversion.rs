use super::definition::FlowDefinition;
use crate::error::FlowConversionError;

/// A trait for custom authoring formats that can be converted into a `FlowDefinition`.
///
/// This is the extension point for loading flows from formats other than the
/// built-in JSON loader. Implement it on your own parsed structs and the rest of
/// the crate (engine, validator, exporter) works unchanged.
///
/// # Example
///
/// ```rust
/// use flowengine::error::FlowConversionError;
/// use flowengine::flow::{FlowDefinition, IntoFlow, Step, StepKind};
///
/// struct Questionnaire {
///     questions: Vec<(String, String)>,
/// }
///
/// impl IntoFlow for Questionnaire {
///     fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
///         let first = self
///             .questions
///             .first()
///             .map(|(id, _)| id.clone())
///             .ok_or_else(|| FlowConversionError::ValidationError("no questions".to_string()))?;
///
///         let ids: Vec<String> = self.questions.iter().map(|(id, _)| id.clone()).collect();
///         let mut steps = Vec::new();
///         for (i, (id, prompt)) in self.questions.into_iter().enumerate() {
///             let mut step = Step::new(id, StepKind::Text, prompt);
///             if let Some(next) = ids.get(i + 1) {
///                 step = step.transition(next.clone());
///             }
///             steps.push(step);
///         }
///         Ok(FlowDefinition::new(first, steps)?)
///     }
/// }
///
/// let flow = Questionnaire {
///     questions: vec![
///         ("name".to_string(), "Your name?".to_string()),
///         ("city".to_string(), "Your city?".to_string()),
///     ],
/// }
/// .into_flow()
/// .unwrap();
/// assert_eq!(flow.step_ids(), vec!["name", "city"]);
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a flow definition.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}
