//! Requirements file loading and parsing
//!
//! This module provides functionality to:
//! - Load a requirements.yml file from disk
//! - Parse both accepted layouts: a top-level list of role entries, and a
//!   mapping with a `roles:` key
//! - Accept shorthand entries that are a bare Galaxy identifier string

use crate::domain::RoleRequirement;
use crate::error::RequirementsError;
use serde::Deserialize;
use std::path::Path;

/// One entry in the requirements file: either a bare source string
/// (`- geerlingguy.java`) or a full mapping with src/name/version/scm
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoleEntry {
    Source(String),
    Detailed(RoleRequirement),
}

impl From<RoleEntry> for RoleRequirement {
    fn from(entry: RoleEntry) -> Self {
        match entry {
            RoleEntry::Source(src) => RoleRequirement::from_src(src),
            RoleEntry::Detailed(role) => role,
        }
    }
}

/// The two accepted file layouts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequirementsDoc {
    Roles(Vec<RoleEntry>),
    Keyed {
        #[serde(default)]
        roles: Vec<RoleEntry>,
    },
}

/// Parse requirements file content into role requirements
///
/// An empty document yields an empty list rather than an error, matching
/// what ansible-galaxy itself accepts.
pub fn parse(content: &str) -> Result<Vec<RoleRequirement>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc: RequirementsDoc = serde_yaml::from_str(content)?;
    let entries = match doc {
        RequirementsDoc::Roles(entries) => entries,
        RequirementsDoc::Keyed { roles } => roles,
    };
    Ok(entries.into_iter().map(RoleRequirement::from).collect())
}

/// Load and parse a requirements file from a path
pub fn load(path: &Path) -> Result<Vec<RoleRequirement>, RequirementsError> {
    if !path.exists() {
        return Err(RequirementsError::not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| RequirementsError::read_error(path, e))?;

    parse(&content).map_err(|e| RequirementsError::yaml_parse_error(path, e.to_string()))
}
