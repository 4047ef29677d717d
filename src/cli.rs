//! CLI argument parsing module for ansible-requirements-lint

use crate::galaxy::DEFAULT_GALAXY_URL;
use clap::Parser;
use std::path::PathBuf;

/// Default number of concurrent Galaxy lookups
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Checks Ansible requirements.yml roles for available updates
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ansible-requirements-lint",
    version,
    about = "Checks Ansible requirements.yml roles for available updates on Ansible Galaxy"
)]
pub struct CliArgs {
    /// Path to the requirements file to lint
    #[arg(default_value = "requirements.yml")]
    pub path: PathBuf,

    /// Ansible Galaxy base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_GALAXY_URL)]
    pub galaxy_url: String,

    /// Maximum number of concurrent Galaxy lookups
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (also lists up-to-date and skipped roles)
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Effective lookup concurrency, never zero
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}
