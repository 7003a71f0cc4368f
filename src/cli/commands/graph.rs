use crate::cli::CliError;
use crate::flow::FlowLoader;
use crate::graph::{self, DiagramFormat};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GraphArgs {
    pub flow_file: PathBuf,
    /// Write the diagram here instead of stdout.
    pub output: Option<PathBuf>,
    pub format: DiagramFormat,
}

/// Exports a flow as a diagram to `out` or to the requested file.
pub fn graph(args: &GraphArgs, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let definition = FlowLoader::load_path(&args.flow_file)?;
    let diagram = graph::export(&definition, args.format);

    match &args.output {
        Some(path) => {
            fs::write(path, &diagram)?;
            writeln!(err, "Diagram written to {}", path.display())?;
        }
        None => write!(out, "{}", diagram)?,
    }
    Ok(())
}
