use crate::cli::CliError;
use crate::flow::{FlowDefinition, FlowLoader};
use crate::validator;
use itertools::Itertools;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ValidateArgs {
    pub flow_file: PathBuf,
}

/// Validates a flow file. Every diagnostic is written to `err`.
pub fn validate(
    args: &ValidateArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let definition = FlowLoader::load_path(&args.flow_file)?;
    let diagnostics = validator::validate(&definition);

    if diagnostics.is_empty() {
        print_success(&definition, out)?;
        return Ok(());
    }

    writeln!(err, "Flow definition has errors:")?;
    for diagnostic in &diagnostics {
        writeln!(err, "  - {}", diagnostic)?;
    }
    Err(CliError::InvalidFlow {
        errors: diagnostics.len(),
    })
}

fn print_success(definition: &FlowDefinition, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Flow definition is valid!")?;
    writeln!(out, "  Start step: {}", definition.start())?;
    writeln!(out, "  Total steps: {}", definition.len())?;
    writeln!(
        out,
        "  Steps: {}",
        definition.steps().iter().map(|s| &s.id).join(", ")
    )?;
    Ok(())
}
