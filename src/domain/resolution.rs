//! Drift resolution result types

use super::RoleRequirement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one role against Ansible Galaxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftStatus {
    /// Declared version is string-identical to the latest known version
    UpToDate,
    /// A different (assumed newer) version is available
    Outdated,
    /// The role could not be checked (lookup failure, no match, no versions)
    Unresolved,
    /// The role resolved but declares no version to compare against
    Unpinned,
}

impl fmt::Display for DriftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriftStatus::UpToDate => write!(f, "up to date"),
            DriftStatus::Outdated => write!(f, "outdated"),
            DriftStatus::Unresolved => write!(f, "unresolved"),
            DriftStatus::Unpinned => write!(f, "unpinned"),
        }
    }
}

/// Result of resolving one role requirement against the registry
///
/// Invariants, upheld by the constructors: `Outdated`, `UpToDate` and
/// `Unpinned` always carry `latest_version`; `Unresolved` never does, and is
/// the only status carrying a `reason`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The role that was checked
    pub role: RoleRequirement,
    /// Latest version known to the registry, when resolution succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    /// Drift verdict
    pub status: DriftStatus,
    /// Human-readable lookup failure, set for Unresolved results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ResolutionResult {
    /// Creates an UpToDate result
    pub fn up_to_date(role: RoleRequirement, latest_version: impl Into<String>) -> Self {
        Self {
            role,
            latest_version: Some(latest_version.into()),
            status: DriftStatus::UpToDate,
            reason: None,
        }
    }

    /// Creates an Outdated result
    pub fn outdated(role: RoleRequirement, latest_version: impl Into<String>) -> Self {
        Self {
            role,
            latest_version: Some(latest_version.into()),
            status: DriftStatus::Outdated,
            reason: None,
        }
    }

    /// Creates an Unresolved result
    pub fn unresolved(role: RoleRequirement, reason: impl Into<String>) -> Self {
        Self {
            role,
            latest_version: None,
            status: DriftStatus::Unresolved,
            reason: Some(reason.into()),
        }
    }

    /// Creates an Unpinned result
    pub fn unpinned(role: RoleRequirement, latest_version: impl Into<String>) -> Self {
        Self {
            role,
            latest_version: Some(latest_version.into()),
            status: DriftStatus::Unpinned,
            reason: None,
        }
    }

    /// Returns true if a newer version is available
    pub fn is_outdated(&self) -> bool {
        self.status == DriftStatus::Outdated
    }

    /// Returns true if the role could not be checked
    pub fn is_unresolved(&self) -> bool {
        self.status == DriftStatus::Unresolved
    }

    /// Returns true if the declared version matches the latest
    pub fn is_up_to_date(&self) -> bool {
        self.status == DriftStatus::UpToDate
    }

    /// Returns true if the role has no declared version to compare
    pub fn is_unpinned(&self) -> bool {
        self.status == DriftStatus::Unpinned
    }

    /// Returns the role's display name
    pub fn role_name(&self) -> &str {
        self.role.display_name()
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            DriftStatus::UpToDate => {
                write!(f, "{}: up to date", self.role)
            }
            DriftStatus::Outdated => write!(
                f,
                "{}: version {} is available",
                self.role,
                self.latest_version.as_deref().unwrap_or("?")
            ),
            DriftStatus::Unresolved => write!(
                f,
                "{}: could not be checked ({})",
                self.role,
                self.reason.as_deref().unwrap_or("unknown reason")
            ),
            DriftStatus::Unpinned => write!(
                f,
                "{}: not pinned, latest version is {}",
                self.role,
                self.latest_version.as_deref().unwrap_or("?")
            ),
        }
    }
}
