//! Error types for the Showcase protocol layer.

use thiserror::Error;

use crate::project::ProjectId;

/// A configured name that is not a known project.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown project: '{0}'")]
pub struct ParseProjectError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Project already registered: {0}")]
    AlreadyRegistered(ProjectId),

    #[error("Default project is not registered: {0}")]
    DefaultNotRegistered(ProjectId),

    #[error("No projects registered")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_error() {
        let err = ParseProjectError("blog".to_string());
        assert_eq!(err.to_string(), "Unknown project: 'blog'");
    }

    #[test]
    fn test_already_registered_error() {
        let err = RegistryError::AlreadyRegistered(ProjectId::ProjectTwo);
        let display = err.to_string();
        assert!(display.contains("already registered"));
        assert!(display.contains("projectTwo"));
    }

    #[test]
    fn test_default_not_registered_error() {
        let err = RegistryError::DefaultNotRegistered(ProjectId::ProjectWeather);
        assert!(err.to_string().contains("projectWeather"));
    }

    #[test]
    fn test_all_error_variants() {
        let errors = vec![
            RegistryError::AlreadyRegistered(ProjectId::ProjectOne),
            RegistryError::DefaultNotRegistered(ProjectId::ProjectOne),
            RegistryError::Empty,
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
