//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the lint summary
//! - Per-role status, declared and latest versions, and failure reasons

use crate::domain::{LintSummary, ResolutionResult};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of the full lint result
#[derive(Serialize)]
struct JsonOutput {
    /// Summary statistics
    summary: JsonSummary,
    /// Per-role results, in declaration order
    roles: Vec<JsonRole>,
    /// Roles skipped before resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<String>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Number of roles checked against the registry
    checked: usize,
    /// Number of outdated roles
    outdated: usize,
    /// Number of up-to-date roles
    up_to_date: usize,
    /// Number of roles that could not be checked
    unresolved: usize,
    /// Number of roles without a version pin
    unpinned: usize,
    /// Number of roles skipped before resolution
    skipped: usize,
}

/// JSON representation of one role result
#[derive(Serialize)]
struct JsonRole {
    /// Role display name
    name: String,
    /// Declared version, absent for unpinned roles
    #[serde(skip_serializing_if = "Option::is_none")]
    declared_version: Option<String>,
    /// Latest version known to the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_version: Option<String>,
    /// Drift status
    status: String,
    /// Lookup failure reason, set for unresolved roles
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<&ResolutionResult> for JsonRole {
    fn from(result: &ResolutionResult) -> Self {
        Self {
            name: result.role_name().to_string(),
            declared_version: result.role.version.clone(),
            latest_version: result.latest_version.clone(),
            status: result.status.to_string().replace(' ', "_"),
            reason: result.reason.clone(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &LintSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            summary: JsonSummary {
                checked: summary.checked(),
                outdated: summary.outdated_count(),
                up_to_date: summary.up_to_date_count(),
                unresolved: summary.unresolved_count(),
                unpinned: summary.unpinned_count(),
                skipped: summary.skipped.len(),
            },
            roles: summary.results.iter().map(JsonRole::from).collect(),
            skipped: summary
                .skipped
                .iter()
                .map(|r| r.display_name().to_string())
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoleRequirement;

    fn role(src: &str, version: Option<&str>) -> RoleRequirement {
        let mut role = RoleRequirement::from_src(src);
        if let Some(v) = version {
            role = role.with_version(v);
        }
        role
    }

    fn render(summary: &LintSummary) -> serde_json::Value {
        let formatter = JsonFormatter::new();
        let mut output = Vec::new();
        formatter.format(summary, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_summary_counts() {
        let mut summary = LintSummary::new();
        summary.add_result(ResolutionResult::outdated(
            role("geerlingguy.java", Some("1.9.0")),
            "1.10.1",
        ));
        summary.add_result(ResolutionResult::up_to_date(
            role("geerlingguy.docker", Some("7.5.3")),
            "7.5.3",
        ));

        let value = render(&summary);
        assert_eq!(value["summary"]["checked"], 2);
        assert_eq!(value["summary"]["outdated"], 1);
        assert_eq!(value["summary"]["up_to_date"], 1);
        assert_eq!(value["summary"]["unresolved"], 0);
    }

    #[test]
    fn test_json_role_fields() {
        let mut summary = LintSummary::new();
        summary.add_result(ResolutionResult::outdated(
            role("geerlingguy.java", Some("1.9.0")),
            "1.10.1",
        ));

        let value = render(&summary);
        let first = &value["roles"][0];
        assert_eq!(first["name"], "geerlingguy.java");
        assert_eq!(first["declared_version"], "1.9.0");
        assert_eq!(first["latest_version"], "1.10.1");
        assert_eq!(first["status"], "outdated");
    }

    #[test]
    fn test_json_unresolved_carries_reason_and_no_latest() {
        let mut summary = LintSummary::new();
        summary.add_result(ResolutionResult::unresolved(
            role("ghost.role", Some("1.0.0")),
            "timeout while querying Ansible Galaxy for 'ghost.role'",
        ));

        let value = render(&summary);
        let first = &value["roles"][0];
        assert_eq!(first["status"], "unresolved");
        assert!(first["reason"].as_str().unwrap().contains("timeout"));
        assert!(first.get("latest_version").is_none());
    }

    #[test]
    fn test_json_unpinned_status() {
        let mut summary = LintSummary::new();
        summary.add_result(ResolutionResult::unpinned(
            role("geerlingguy.redis", None),
            "1.8.0",
        ));

        let value = render(&summary);
        let first = &value["roles"][0];
        assert_eq!(first["status"], "unpinned");
        assert!(first.get("declared_version").is_none());
        assert_eq!(first["latest_version"], "1.8.0");
    }

    #[test]
    fn test_json_skipped_roles_listed() {
        let mut summary = LintSummary::new();
        summary.add_skipped(role("git+https://example.com/role.git", None));

        let value = render(&summary);
        assert_eq!(value["summary"]["skipped"], 1);
        assert_eq!(value["skipped"][0], "git+https://example.com/role.git");
    }

    #[test]
    fn test_json_empty_summary_omits_skipped() {
        let value = render(&LintSummary::new());
        assert_eq!(value["summary"]["checked"], 0);
        assert!(value.get("skipped").is_none());
    }
}
