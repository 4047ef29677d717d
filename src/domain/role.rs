//! Role requirement structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one role entry from a requirements.yml file
///
/// All fields are optional in the file format: plain Galaxy roles are usually
/// declared with just `src` (for example `geerlingguy.java`), while aliased or
/// forked roles carry a separate `name`. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// Local alias for the role, overrides src for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source the role is installed from (Galaxy identifier or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Declared version pin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Source control system (set for git/hg sources, absent for Galaxy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<String>,
}

impl RoleRequirement {
    /// Creates a Galaxy role requirement from a source identifier
    pub fn from_src(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    /// Sets the declared version (builder pattern)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the local alias name (builder pattern)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the scm field (builder pattern)
    pub fn with_scm(mut self, scm: impl Into<String>) -> Self {
        self.scm = Some(scm.into());
        self
    }

    /// The name this role is reported under: `name` if set, else `src`
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.src.as_deref())
            .unwrap_or("")
    }

    /// The keyword used to search Ansible Galaxy
    ///
    /// `src` wins over `name` when both are present, so aliased roles are
    /// looked up under their upstream identifier.
    pub fn search_keyword(&self) -> &str {
        self.src
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// The namespace the search results are disambiguated against: the part
    /// of the keyword before the first `.`, or empty if there is no separator
    pub fn expected_namespace(&self) -> &str {
        match self.search_keyword().split_once('.') {
            Some((namespace, _)) => namespace,
            None => "",
        }
    }

    /// Returns true if this role is declared with an explicit version
    pub fn is_pinned(&self) -> bool {
        self.version.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Returns true when the role is not installable from Galaxy search:
    /// an scm is set, or the src is a URL rather than a Galaxy identifier
    pub fn is_remote_source(&self) -> bool {
        if self.scm.as_deref().is_some_and(|s| !s.is_empty()) {
            return true;
        }
        self.src
            .as_deref()
            .is_some_and(|s| s.contains("://") || s.starts_with("git+"))
    }
}

impl fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version.as_deref() {
            Some(version) => write!(f, "{}@{}", self.display_name(), version),
            None => write!(f, "{}", self.display_name()),
        }
    }
}
