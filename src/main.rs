//! ansible-requirements-lint - Ansible Galaxy update linter CLI
//!
//! Reads a requirements.yml, checks every Galaxy role against the Ansible
//! Galaxy search API, and reports roles with newer versions available.
//!
//! Exit codes:
//! - 0: every checked role is up to date
//! - 1: at least one role is outdated, unpinned, or could not be checked
//! - 2: fatal error before linting (unreadable or invalid requirements file)

use ansible_requirements_lint::cli::CliArgs;
use ansible_requirements_lint::orchestrator::Orchestrator;
use ansible_requirements_lint::output::{create_formatter, OutputConfig};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("ansible-requirements-lint v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Requirements: {}", args.path.display());
        eprintln!("Galaxy: {}", args.galaxy_url);
    }

    let orchestrator = Orchestrator::new(args.clone())?;

    // Ctrl-C aborts in-flight lookups; the run still reports what it has,
    // with interrupted roles shown as unresolved
    let cancel = orchestrator.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let summary = orchestrator.run().await?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    if summary.has_findings() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
