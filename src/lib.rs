//! ansible-requirements-lint - Ansible Galaxy update linter library
//!
//! This library provides the core functionality for checking the roles
//! declared in an Ansible requirements.yml against Ansible Galaxy and
//! reporting which ones have newer versions available. Checks are read-only:
//! nothing is ever installed or modified.

pub mod cli;
pub mod domain;
pub mod error;
pub mod galaxy;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod requirements;
pub mod resolver;
