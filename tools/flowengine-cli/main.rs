use clap::{Parser, Subcommand, ValueEnum};
use flowengine::cli::display::banner;
use flowengine::cli::{
    self, CliError, GraphArgs, RunArgs, TerminalRenderer, ValidateArgs,
};
use flowengine::graph::DiagramFormat;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `FLOWENGINE_LOG=flowengine=debug`.
const LOG_ENV: &str = "FLOWENGINE_LOG";

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Mermaid,
}

impl From<FormatCli> for DiagramFormat {
    fn from(format: FormatCli) -> Self {
        match format {
            FormatCli::Mermaid => DiagramFormat::Mermaid,
        }
    }
}

/// Run, validate and diagram declarative wizard flows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a flow definition interactively
    Run {
        /// Path to flow definition (.json file)
        flow_file: PathBuf,
        /// Output file for JSON results
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a flow definition as a Mermaid diagram
    Graph {
        /// Path to flow definition (.json file)
        flow_file: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "mermaid")]
        format: FormatCli,
    },
    /// Validate a flow definition file
    Validate {
        /// Path to flow definition (.json file)
        flow_file: PathBuf,
    },
    /// Print version information
    Version,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let (result, boxed_errors) = match cli.command {
        Command::Run { flow_file, output } => {
            let args = RunArgs { flow_file, output };
            let mut renderer = TerminalRenderer::new();
            (cli::run(&args, &mut renderer, &mut stdout).map(|_| ()), true)
        }
        Command::Graph {
            flow_file,
            output,
            format,
        } => {
            let args = GraphArgs {
                flow_file,
                output,
                format: format.into(),
            };
            (cli::graph(&args, &mut stdout, &mut stderr), false)
        }
        Command::Validate { flow_file } => {
            let args = ValidateArgs { flow_file };
            (cli::validate(&args, &mut stdout, &mut stderr), false)
        }
        Command::Version => (cli::version(&mut stdout), false),
    };

    if let Err(e) = result {
        exit_with_error(&e, boxed_errors);
    }
}

fn exit_with_error(error: &CliError, boxed: bool) -> ! {
    if let Some(message) = error.user_message() {
        if boxed {
            eprintln!("{}", banner(Some("ERROR"), &message));
        } else {
            eprintln!("{}", message);
        }
    }
    std::process::exit(1);
}
