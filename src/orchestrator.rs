//! Lint orchestrator for coordinating the whole check workflow
//!
//! This module provides:
//! - Workflow coordination: load -> filter -> resolve -> summarize
//! - Bounded parallel Galaxy lookups via a semaphore
//! - Prompt cancellation of in-flight lookups on interrupt
//! - Error handling with per-role containment
//!
//! Each role resolves independently, in declaration order in the summary.
//! A lookup failure for one role never stops the others.

use crate::cli::CliArgs;
use crate::domain::{LintSummary, ResolutionResult};
use crate::error::AppError;
use crate::galaxy::{GalaxyClient, HttpClient, RoleCatalog};
use crate::progress::Progress;
use crate::requirements;
use crate::resolver::Resolver;
use std::sync::Arc;
use tokio::sync::{watch, Semaphore};

/// Orchestrator for a single lint run
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Resolver shared by all lookup tasks
    resolver: Arc<Resolver>,
    /// Bound on in-flight Galaxy lookups
    semaphore: Arc<Semaphore>,
    /// Cancellation signal, flipped to true on interrupt
    cancel: watch::Sender<bool>,
}

/// Handle for cancelling a running lint from another task
#[derive(Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signal cancellation; in-flight lookups abort and report unresolved
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Wait until the cancellation flag flips to true
///
/// Never completes if the sender disappears without cancelling.
async fn wait_cancelled(mut rx: watch::Receiver<bool>) {
    while !*rx.borrow() {
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl Orchestrator {
    /// Create a new orchestrator from CLI arguments
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        let catalog = GalaxyClient::with_base_url(client, args.galaxy_url.clone());
        Ok(Self::with_catalog(args, Box::new(catalog)))
    }

    /// Create an orchestrator over a custom catalog (for testing)
    pub fn with_catalog(args: CliArgs, catalog: Box<dyn RoleCatalog>) -> Self {
        let concurrency = args.effective_concurrency();
        let (cancel, _) = watch::channel(false);
        Self {
            args,
            resolver: Arc::new(Resolver::new(catalog)),
            semaphore: Arc::new(Semaphore::new(concurrency)),
            cancel,
        }
    }

    /// Returns a handle that cancels this run when triggered
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            tx: self.cancel.clone(),
        }
    }

    /// Run the lint workflow
    pub async fn run(&self) -> Result<LintSummary, AppError> {
        let show_progress = !self.args.quiet && !self.args.json;
        let mut progress = Progress::new(show_progress);

        progress.spinner("Reading requirements...");
        let roles = requirements::load(&self.args.path)?;
        progress.finish_and_clear();

        let mut summary = LintSummary::new();
        let mut checkable = Vec::new();
        for role in roles {
            if role.is_remote_source() {
                summary.add_skipped(role);
            } else {
                checkable.push(role);
            }
        }

        if checkable.is_empty() {
            return Ok(summary);
        }

        progress.start(checkable.len() as u64, "Checking roles on Ansible Galaxy");

        let mut handles = Vec::with_capacity(checkable.len());
        for role in checkable {
            let resolver = Arc::clone(&self.resolver);
            let semaphore = Arc::clone(&self.semaphore);
            let cancelled = self.cancel.subscribe();

            handles.push(tokio::spawn(async move {
                let cancel_role = role.clone();
                tokio::select! {
                    result = async {
                        let _permit = semaphore.acquire_owned().await.unwrap();
                        resolver.resolve(&role).await
                    } => result,
                    _ = wait_cancelled(cancelled) => {
                        ResolutionResult::unresolved(cancel_role, "lookup cancelled")
                    }
                }
            }));
        }

        for handle in handles {
            if let Ok(result) = handle.await {
                progress.set_message(&format!("Checked {}", result.role_name()));
                summary.add_result(result);
            }
            progress.inc();
        }
        progress.finish_and_clear();

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DriftStatus;
    use crate::error::RegistryError;
    use crate::galaxy::CatalogEntry;
    use async_trait::async_trait;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    /// Catalog keyed by keyword namespace, single matching entry per role
    struct MapCatalog;

    #[async_trait]
    impl RoleCatalog for MapCatalog {
        async fn search(&self, keyword: &str) -> Result<Vec<CatalogEntry>, RegistryError> {
            match keyword {
                "geerlingguy.java" => Ok(vec![CatalogEntry {
                    namespace: "geerlingguy".to_string(),
                    versions: vec!["1.10.1".to_string(), "1.9.0".to_string()],
                }]),
                "geerlingguy.docker" => Ok(vec![CatalogEntry {
                    namespace: "geerlingguy".to_string(),
                    versions: vec!["7.5.3".to_string()],
                }]),
                _ => Ok(vec![]),
            }
        }
    }

    fn args_for(path: &std::path::Path) -> CliArgs {
        CliArgs::parse_from(["ansible-requirements-lint", path.to_str().unwrap(), "--quiet"])
    }

    fn write_requirements(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("requirements.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_resolves_all_roles_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_requirements(
            &dir,
            "- src: geerlingguy.java\n  version: 1.9.0\n- src: geerlingguy.docker\n  version: 7.5.3\n",
        );

        let orchestrator = Orchestrator::with_catalog(args_for(&path), Box::new(MapCatalog));
        let summary = orchestrator.run().await.unwrap();

        assert_eq!(summary.checked(), 2);
        assert_eq!(summary.results[0].role_name(), "geerlingguy.java");
        assert_eq!(summary.results[0].status, DriftStatus::Outdated);
        assert_eq!(summary.results[1].role_name(), "geerlingguy.docker");
        assert_eq!(summary.results[1].status, DriftStatus::UpToDate);
    }

    #[tokio::test]
    async fn test_run_skips_remote_sources_without_lookup() {
        let dir = TempDir::new().unwrap();
        let path = write_requirements(
            &dir,
            "- src: https://github.com/geerlingguy/ansible-role-java\n  scm: git\n  version: master\n",
        );

        let orchestrator = Orchestrator::with_catalog(args_for(&path), Box::new(MapCatalog));
        let summary = orchestrator.run().await.unwrap();

        assert_eq!(summary.checked(), 0);
        assert_eq!(summary.skipped.len(), 1);
        assert!(!summary.has_findings());
    }

    #[tokio::test]
    async fn test_run_unknown_role_is_unresolved() {
        let dir = TempDir::new().unwrap();
        let path = write_requirements(&dir, "- src: ghost.role\n  version: 1.0.0\n");

        let orchestrator = Orchestrator::with_catalog(args_for(&path), Box::new(MapCatalog));
        let summary = orchestrator.run().await.unwrap();

        assert_eq!(summary.unresolved_count(), 1);
        assert!(summary.has_findings());
    }

    #[tokio::test]
    async fn test_run_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("requirements.yml");

        let orchestrator = Orchestrator::with_catalog(args_for(&path), Box::new(MapCatalog));
        let err = orchestrator.run().await.unwrap_err();
        assert!(matches!(err, AppError::Requirements(_)));
    }

    #[tokio::test]
    async fn test_run_empty_requirements() {
        let dir = TempDir::new().unwrap();
        let path = write_requirements(&dir, "");

        let orchestrator = Orchestrator::with_catalog(args_for(&path), Box::new(MapCatalog));
        let summary = orchestrator.run().await.unwrap();
        assert_eq!(summary.checked(), 0);
        assert!(!summary.has_findings());
    }

    #[tokio::test]
    async fn test_cancelled_run_reports_unresolved() {
        /// Catalog that blocks until cancelled
        struct HangingCatalog;

        #[async_trait]
        impl RoleCatalog for HangingCatalog {
            async fn search(&self, _keyword: &str) -> Result<Vec<CatalogEntry>, RegistryError> {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }

        let dir = TempDir::new().unwrap();
        let path = write_requirements(&dir, "- src: ns.role\n  version: 1.0.0\n");

        let orchestrator = Orchestrator::with_catalog(args_for(&path), Box::new(HangingCatalog));
        let cancel = orchestrator.cancel_handle();

        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            cancel.cancel();
        });

        let summary = orchestrator.run().await.unwrap();
        assert_eq!(summary.unresolved_count(), 1);
        assert_eq!(
            summary.results[0].reason.as_deref(),
            Some("lookup cancelled")
        );
    }
}
