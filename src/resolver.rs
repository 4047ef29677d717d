//! Role drift resolution
//!
//! This module provides:
//! - Search keyword and namespace derivation from a role requirement
//! - Disambiguation among multiple catalog entries
//! - The drift verdict against the declared version
//!
//! Resolution never fails: every registry or matching problem degrades to an
//! Unresolved result so the remaining roles keep getting checked.

use crate::domain::{ResolutionResult, RoleRequirement};
use crate::galaxy::{CatalogEntry, RoleCatalog};

/// Resolves role requirements against a role catalog
pub struct Resolver {
    catalog: Box<dyn RoleCatalog>,
}

impl Resolver {
    /// Create a resolver over the given catalog
    pub fn new(catalog: Box<dyn RoleCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve a single role requirement to a drift verdict
    pub async fn resolve(&self, role: &RoleRequirement) -> ResolutionResult {
        let keyword = role.search_keyword();
        if keyword.is_empty() {
            return ResolutionResult::unresolved(
                role.clone(),
                "no name or src to search Ansible Galaxy for",
            );
        }

        let entries = match self.catalog.search(keyword).await {
            Ok(entries) => entries,
            Err(e) => return ResolutionResult::unresolved(role.clone(), e.to_string()),
        };

        // A single hit is trusted unconditionally, even if its namespace
        // differs: some registries return an already-filtered result.
        // With multiple hits, the first entry whose namespace exactly
        // equals the expected one wins.
        let selected = if entries.len() == 1 {
            entries.into_iter().next()
        } else {
            let namespace = role.expected_namespace();
            entries.into_iter().find(|e| e.namespace == namespace)
        };

        let Some(entry) = selected else {
            return ResolutionResult::unresolved(
                role.clone(),
                format!("unable to find role in Ansible Galaxy: {}", keyword),
            );
        };

        self.verdict(role, entry)
    }

    /// Compare the declared version against the entry's latest version
    ///
    /// The registry's own ordering is authoritative: the first listed version
    /// is the latest, and versions are compared as plain strings. `v1.0.0`
    /// and `1.0.0` are therefore different versions.
    fn verdict(&self, role: &RoleRequirement, entry: CatalogEntry) -> ResolutionResult {
        let Some(latest) = entry.versions.into_iter().next() else {
            return ResolutionResult::unresolved(
                role.clone(),
                format!("no versions published for role: {}", role.search_keyword()),
            );
        };

        match role.version.as_deref() {
            None | Some("") => ResolutionResult::unpinned(role.clone(), latest),
            Some(declared) if declared == latest => {
                ResolutionResult::up_to_date(role.clone(), latest)
            }
            Some(_) => ResolutionResult::outdated(role.clone(), latest),
        }
    }
}
