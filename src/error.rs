//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RequirementsError: Issues with the requirements.yml file
//! - RegistryError: Issues with the Ansible Galaxy API

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Requirements file related errors
    #[error(transparent)]
    Requirements(#[from] RequirementsError),

    /// Ansible Galaxy related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors related to the requirements file
#[derive(Error, Debug)]
pub enum RequirementsError {
    /// Requirements file not found
    #[error("requirements file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the requirements file
    #[error("failed to read requirements file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("failed to parse YAML in {path}: {message}")]
    YamlParseError { path: PathBuf, message: String },
}

/// Errors related to Ansible Galaxy communication
///
/// `Network` and `Timeout` cover transport failures; `UnexpectedStatus` and
/// `InvalidResponse` cover protocol failures. None of these abort a lint run:
/// the resolver degrades them to an unresolved result for the affected role.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Request could not be sent
    #[error("failed to query Ansible Galaxy for '{role}': {message}")]
    Network { role: String, message: String },

    /// Request timed out
    #[error("timeout while querying Ansible Galaxy for '{role}'")]
    Timeout { role: String },

    /// Response status code outside the success range
    #[error("unexpected Ansible Galaxy response code for '{role}': {status}")]
    UnexpectedStatus { role: String, status: u16 },

    /// Response body could not be decoded
    #[error("invalid Ansible Galaxy response for '{role}': {message}")]
    InvalidResponse { role: String, message: String },
}

impl RequirementsError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        RequirementsError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RequirementsError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        RequirementsError::YamlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new Network error
    pub fn network(role: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Network {
            role: role.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(role: impl Into<String>) -> Self {
        RegistryError::Timeout { role: role.into() }
    }

    /// Creates a new UnexpectedStatus error
    pub fn unexpected_status(role: impl Into<String>, status: u16) -> Self {
        RegistryError::UnexpectedStatus {
            role: role.into(),
            status,
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(role: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            role: role.into(),
            message: message.into(),
        }
    }

    /// Returns true for transport-level failures (request never completed)
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            RegistryError::Network { .. } | RegistryError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_error_not_found() {
        let err = RequirementsError::not_found("/path/to/requirements.yml");
        let msg = format!("{}", err);
        assert!(msg.contains("requirements file not found"));
        assert!(msg.contains("requirements.yml"));
    }

    #[test]
    fn test_requirements_error_yaml_parse() {
        let err = RequirementsError::yaml_parse_error("/path/to/requirements.yml", "bad indent");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse YAML"));
        assert!(msg.contains("bad indent"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network("geerlingguy.java", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to query Ansible Galaxy"));
        assert!(msg.contains("connection refused"));
        assert!(err.is_network());
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("geerlingguy.java");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("geerlingguy.java"));
        assert!(err.is_network());
    }

    #[test]
    fn test_registry_error_unexpected_status() {
        let err = RegistryError::unexpected_status("geerlingguy.java", 503);
        let msg = format!("{}", err);
        assert!(msg.contains("unexpected Ansible Galaxy response code"));
        assert!(msg.contains("503"));
        assert!(!err.is_network());
    }

    #[test]
    fn test_registry_error_invalid_response() {
        let err = RegistryError::invalid_response("geerlingguy.java", "expected a JSON object");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid Ansible Galaxy response"));
        assert!(!err.is_network());
    }

    #[test]
    fn test_app_error_from_requirements_error() {
        let req_err = RequirementsError::not_found("/path");
        let app_err: AppError = req_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("requirements file not found"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let reg_err = RegistryError::timeout("ns.role");
        let app_err: AppError = reg_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("timeout"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = RequirementsError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
