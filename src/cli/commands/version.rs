use crate::cli::{CLI_VERSION, CliError};
use std::io::Write;

pub fn version(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "flowengine-cli {}", CLI_VERSION)?;
    writeln!(out, "flowengine {}", crate::ENGINE_VERSION)?;
    Ok(())
}
