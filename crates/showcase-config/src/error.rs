//! Configuration errors.

use thiserror::Error;

use crate::validator::ValidationError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid configuration: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.path, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ConfigError::NotFound("config.toml".to_string());
        assert!(err.to_string().contains("config.toml"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::InvalidValue {
            field: "weather.unit".to_string(),
            message: "unknown unit".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("weather.unit"));
        assert!(display.contains("unknown unit"));
    }

    #[test]
    fn test_env_var_not_set_error() {
        let err = ConfigError::EnvVarNotSet("PROJECT".to_string());
        assert!(err.to_string().contains("PROJECT"));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_invalid_lists_every_error() {
        let err = ConfigError::Invalid(vec![
            ValidationError::new("server.port", "Port cannot be 0"),
            ValidationError::new("project.default", "Unknown project: 'blog'"),
        ]);
        let display = err.to_string();
        assert!(display.contains("server.port: Port cannot be 0"));
        assert!(display.contains("project.default"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_debug() {
        let err = ConfigError::NotFound("test.toml".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
