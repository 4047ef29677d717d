//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One warning line per outdated role naming the available version
//! - Distinct rendering of unresolved lookups and unpinned roles
//! - Skipped non-Galaxy roles and up-to-date roles in verbose mode
//! - Summary with per-status counts

use crate::domain::{DriftStatus, LintSummary, ResolutionResult};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Calculate the maximum role name length for alignment
    fn max_name_length<'a>(&self, results: impl Iterator<Item = &'a ResolutionResult>) -> usize {
        results
            .map(|r| r.role_name().len())
            .max()
            .unwrap_or(0)
            .max(20)
    }

    /// Format a single result line
    fn format_result_line(
        &self,
        result: &ResolutionResult,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let name = format!("{:width$}", result.role_name(), width = max_name_len);
        let declared = result.role.version.as_deref().unwrap_or("(unpinned)");
        let latest = result.latest_version.as_deref().unwrap_or("?");

        match result.status {
            DriftStatus::Outdated => {
                if self.color {
                    writeln!(
                        writer,
                        "  {} {} {} {} {}",
                        "✗".red(),
                        name,
                        declared.dimmed(),
                        "→".dimmed(),
                        latest.bright_white().bold()
                    )
                } else {
                    writeln!(writer, "  X {} {} -> {}", name, declared, latest)
                }
            }
            DriftStatus::UpToDate => {
                if self.color {
                    writeln!(
                        writer,
                        "  {} {} {}",
                        "✓".green(),
                        name,
                        declared.dimmed()
                    )
                } else {
                    writeln!(writer, "  = {} {}", name, declared)
                }
            }
            DriftStatus::Unresolved => {
                let reason = result.reason.as_deref().unwrap_or("unknown reason");
                if self.color {
                    writeln!(
                        writer,
                        "  {} {} {}",
                        "?".yellow(),
                        name,
                        format!("could not be checked: {}", reason).dimmed()
                    )
                } else {
                    writeln!(writer, "  ? {} could not be checked: {}", name, reason)
                }
            }
            DriftStatus::Unpinned => {
                if self.color {
                    writeln!(
                        writer,
                        "  {} {} {}",
                        "!".yellow(),
                        name,
                        format!("not pinned, latest version is {}", latest).dimmed()
                    )
                } else {
                    writeln!(writer, "  ! {} not pinned, latest version is {}", name, latest)
                }
            }
        }
    }

    /// Format the summary counts block
    fn format_summary(&self, summary: &LintSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let outdated = summary.outdated_count();
        let up_to_date = summary.up_to_date_count();
        let unresolved = summary.unresolved_count();
        let unpinned = summary.unpinned_count();
        let skipped = summary.skipped.len();

        if self.verbosity == Verbosity::Quiet {
            if outdated > 0 {
                if self.color {
                    writeln!(writer, "{} {}", outdated.to_string().red(), "outdated")?;
                } else {
                    writeln!(writer, "{} outdated", outdated)?;
                }
            } else if self.color {
                writeln!(writer, "{}", "No updates available".dimmed())?;
            } else {
                writeln!(writer, "No updates available")?;
            }
            return Ok(());
        }

        let mut parts = Vec::new();
        if self.color {
            if outdated > 0 {
                parts.push(format!("{} outdated", outdated.to_string().red()));
            }
            parts.push(format!("{} up to date", up_to_date.to_string().green()));
            if unpinned > 0 {
                parts.push(format!("{} unpinned", unpinned.to_string().yellow()));
            }
            if unresolved > 0 {
                parts.push(format!("{} unresolved", unresolved.to_string().yellow()));
            }
            if skipped > 0 {
                parts.push(format!("{} skipped", skipped.to_string().dimmed()));
            }
            writeln!(
                writer,
                "{} {} role(s) checked: {}",
                "Summary:".bold(),
                summary.checked(),
                parts.join(", ")
            )
        } else {
            if outdated > 0 {
                parts.push(format!("{} outdated", outdated));
            }
            parts.push(format!("{} up to date", up_to_date));
            if unpinned > 0 {
                parts.push(format!("{} unpinned", unpinned));
            }
            if unresolved > 0 {
                parts.push(format!("{} unresolved", unresolved));
            }
            if skipped > 0 {
                parts.push(format!("{} skipped", skipped));
            }
            writeln!(
                writer,
                "Summary: {} role(s) checked: {}",
                summary.checked(),
                parts.join(", ")
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &LintSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return self.format_summary(summary, writer);
        }

        // Findings come first; up-to-date roles only show in verbose mode
        let shown: Vec<&ResolutionResult> = summary
            .results
            .iter()
            .filter(|r| self.verbosity == Verbosity::Verbose || !r.is_up_to_date())
            .collect();

        if !shown.is_empty() {
            let max_name_len = self.max_name_length(shown.iter().copied());
            for result in &shown {
                self.format_result_line(result, max_name_len, writer)?;
            }
            writeln!(writer)?;
        }

        if self.verbosity == Verbosity::Verbose && !summary.skipped.is_empty() {
            if self.color {
                writeln!(writer, "  {}", "Skipped (non-Galaxy source):".dimmed())?;
            } else {
                writeln!(writer, "  Skipped (non-Galaxy source):")?;
            }
            for role in &summary.skipped {
                if self.color {
                    writeln!(writer, "    {}", role.display_name().dimmed())?;
                } else {
                    writeln!(writer, "    {}", role.display_name())?;
                }
            }
            writeln!(writer)?;
        }

        self.format_summary(summary, writer)
    }
}
