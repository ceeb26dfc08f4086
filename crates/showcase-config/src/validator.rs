//! Configuration validation.

use showcase_protocols::{ProjectId, TemperatureUnit};

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn collected errors into a [`ConfigError`], handing back the warnings.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(ConfigError::Invalid(self.errors))
        }
    }
}

/// A validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_project(config, &mut result);
        Self::validate_weather(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_project(config: &Config, result: &mut ValidationResult) {
        let project = &config.project;

        if project.enabled.is_empty() {
            result.add_error(ValidationError::new(
                "project.enabled",
                "At least one project must be enabled",
            ));
        }

        let mut seen = Vec::new();
        for name in &project.enabled {
            match name.parse::<ProjectId>() {
                Ok(id) if seen.contains(&id) => {
                    result.add_warning(ValidationWarning::new(
                        "project.enabled",
                        format!("Project '{}' is listed more than once", name),
                    ));
                }
                Ok(id) => seen.push(id),
                Err(e) => result.add_error(ValidationError::new("project.enabled", e.to_string())),
            }
        }

        // The fallback must always be servable, so a bad default stops startup here.
        match project.default.parse::<ProjectId>() {
            Ok(id) if !seen.is_empty() && !seen.contains(&id) => {
                result.add_error(ValidationError::new(
                    "project.default",
                    format!("Default project '{}' is not enabled", id),
                ));
            }
            Ok(_) => {}
            Err(e) => result.add_error(ValidationError::new("project.default", e.to_string())),
        }

        if let Some(ref selected) = project.selected {
            if selected.parse::<ProjectId>().is_err() {
                result.add_warning(ValidationWarning::new(
                    "project.selected",
                    format!(
                        "Unknown project '{}', the default project will be served",
                        selected
                    ),
                ));
            }
        }
    }

    fn validate_weather(config: &Config, result: &mut ValidationResult) {
        if let Err(e) = config.weather.unit.parse::<TemperatureUnit>() {
            result.add_error(ValidationError::new("weather.unit", e.to_string()));
        }

        if config.weather.location.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "weather.location",
                "Location is empty, the forecast will have no heading",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "'{}' is not a plain level, it will be used as a filter directive",
                    config.logging.level
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
