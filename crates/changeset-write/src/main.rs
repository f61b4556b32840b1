mod error;
mod input;
mod logging;
mod output;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use changeset_operations::operations::WriteOperation;
use changeset_operations::providers::{
    FileSystemChangesetWriter, FileSystemProjectProvider, Git2Provider, ProjectFormatterProvider,
};
use clap::Parser;

use crate::error::{CliError, Result};
use crate::logging::{LogFormat, LogLevel};

#[derive(Parser)]
#[command(name = "changeset-write")]
#[command(version = env!("CHANGESET_WRITE_VERSION"))]
#[command(about = "Write changeset files for packages in a JavaScript monorepo", long_about = None)]
struct Cli {
    /// Repository root (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// JSON change description to read, or '-' for stdin
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Summary of the change
    #[arg(long, short = 'm')]
    summary: Option<String>,

    /// Package release as '<package>:<bump>' (repeatable)
    #[arg(long = "release", short = 'r', value_name = "PACKAGE:BUMP")]
    releases: Vec<String>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level, cli.log_format)?;

    let root = resolve_start_path(cli.path)?;
    let changeset = input::build_changeset(cli.input.as_deref(), cli.summary, &cli.releases)?;

    let operation = WriteOperation::new(
        FileSystemProjectProvider::new(),
        Git2Provider::new(),
        ProjectFormatterProvider::new(),
        FileSystemChangesetWriter::new(),
    );
    let output = operation.execute(&root, &changeset).await?;

    if let Err(e) = output::report(&output, &mut io::stdout(), &mut io::stderr()) {
        tracing::warn!(error = %e, "failed to print results");
    }

    let failed = output.failures().count();
    if failed > 0 {
        return Err(CliError::ReleasesFailed {
            failed,
            total: output.releases.len(),
        });
    }
    Ok(())
}

/// Absolute, symlink-free start path.
fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p,
        None => std::env::current_dir().map_err(CliError::CurrentDir)?,
    };
    dunce::canonicalize(&path).map_err(|source| CliError::StartPath { path, source })
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
