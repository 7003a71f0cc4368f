use crate::answer::Answers;
use crate::cli::display::{banner, step_indicator};
use crate::cli::{AnswerProvider, CliError};
use crate::engine::Engine;
use crate::flow::FlowLoader;
use chrono::{Local, SecondsFormat};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub flow_file: PathBuf,
    /// Also write the JSON results to this file.
    pub output: Option<PathBuf>,
}

/// The JSON summary printed at the end of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub flow_file: String,
    pub path_taken: Vec<String>,
    pub answers: Answers,
    pub steps_completed: usize,
    pub completed_at: String,
}

impl RunReport {
    fn from_engine(flow_file: &str, engine: &Engine<'_>) -> Self {
        Self {
            flow_file: flow_file.to_string(),
            path_taken: engine.history().to_vec(),
            answers: engine.answers().clone(),
            steps_completed: engine.history().len(),
            completed_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

/// Runs a flow to completion, asking `provider` for every answer.
pub fn run(
    args: &RunArgs,
    provider: &mut dyn AnswerProvider,
    out: &mut dyn Write,
) -> Result<RunReport, CliError> {
    let definition = FlowLoader::load_path(&args.flow_file)?;
    let mut engine = Engine::new(&definition)?;

    writeln!(out, "{}", banner(None, "FlowEngine Interactive Wizard"))?;

    while !engine.finished() {
        let step = engine.current_step()?;
        writeln!(out, "{}", step_indicator(engine.history().len(), &step.id))?;
        let value = provider.ask(step)?;
        engine.answer(value)?;
    }

    let report = RunReport::from_engine(&args.flow_file.display().to_string(), &engine);
    let json_output = serde_json::to_string_pretty(&report)?;

    writeln!(out, "{}", banner(Some("SUCCESS"), "Flow completed!"))?;
    writeln!(out, "{}", json_output)?;

    if let Some(path) = &args.output {
        fs::write(path, &json_output)?;
        writeln!(out, "\nResults saved to {}", path.display())?;
    }

    info!(steps = report.steps_completed, "Run complete");
    Ok(report)
}
