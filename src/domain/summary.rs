//! Lint run summary types
//!
//! Tracks the resolution results and skipped roles for a whole run.

use super::{DriftStatus, ResolutionResult, RoleRequirement};
use serde::{Deserialize, Serialize};

/// Overall result of linting one requirements file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LintSummary {
    /// Resolution results, in declaration order
    pub results: Vec<ResolutionResult>,
    /// Roles that were not checked (non-Galaxy sources)
    pub skipped: Vec<RoleRequirement>,
}

impl LintSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resolution result
    pub fn add_result(&mut self, result: ResolutionResult) {
        self.results.push(result);
    }

    /// Records a role that was skipped before resolution
    pub fn add_skipped(&mut self, role: RoleRequirement) {
        self.skipped.push(role);
    }

    /// Number of roles checked against the registry
    pub fn checked(&self) -> usize {
        self.results.len()
    }

    fn count(&self, status: DriftStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Number of roles with a newer version available
    pub fn outdated_count(&self) -> usize {
        self.count(DriftStatus::Outdated)
    }

    /// Number of roles at their latest version
    pub fn up_to_date_count(&self) -> usize {
        self.count(DriftStatus::UpToDate)
    }

    /// Number of roles that could not be checked
    pub fn unresolved_count(&self) -> usize {
        self.count(DriftStatus::Unresolved)
    }

    /// Number of roles with no declared version
    pub fn unpinned_count(&self) -> usize {
        self.count(DriftStatus::Unpinned)
    }

    /// Returns all outdated results
    pub fn outdated(&self) -> impl Iterator<Item = &ResolutionResult> {
        self.results.iter().filter(|r| r.is_outdated())
    }

    /// Returns all unresolved results
    pub fn unresolved(&self) -> impl Iterator<Item = &ResolutionResult> {
        self.results.iter().filter(|r| r.is_unresolved())
    }

    /// Returns true if anything needs the user's attention: a role is
    /// outdated, unpinned, or could not be verified
    pub fn has_findings(&self) -> bool {
        self.outdated_count() + self.unpinned_count() + self.unresolved_count() > 0
    }
}
