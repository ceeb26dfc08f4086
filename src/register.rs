//! Project registration from configuration.

use std::sync::Arc;

use tracing::debug;

use showcase_config::{Config, ConfigError};
use showcase_core::ProjectRegistry;
use showcase_project_one::ProjectOneView;
use showcase_project_two::ProjectTwoView;
use showcase_project_weather::{TemperatureUnit, WeatherView};
use showcase_protocols::{ProjectId, ViewProvider};

/// Build the registry for the enabled projects.
///
/// Fails when the default project is unknown or not enabled, so a bad
/// fallback is caught at startup instead of on a request.
pub(crate) fn build_registry(config: &Config) -> Result<ProjectRegistry, Box<dyn std::error::Error>> {
    let default: ProjectId = config.project.default.parse()?;
    let unit = config
        .weather
        .unit
        .parse::<TemperatureUnit>()
        .map_err(|e| ConfigError::InvalidValue {
            field: "weather.unit".to_string(),
            message: e.to_string(),
        })?;

    let mut builder = ProjectRegistry::builder();
    for id in config.project.enabled_ids() {
        builder = builder.register(create_view(id, config, unit))?;
        debug!("Registered project: {}", id);
    }

    Ok(builder.build(default)?)
}

fn create_view(id: ProjectId, config: &Config, unit: TemperatureUnit) -> Arc<dyn ViewProvider> {
    match id {
        ProjectId::ProjectOne => Arc::new(ProjectOneView::default()),
        ProjectId::ProjectTwo => Arc::new(ProjectTwoView::default()),
        ProjectId::ProjectWeather => Arc::new(WeatherView::with_sample_forecast(
            config.weather.location.clone(),
            unit,
        )),
    }
}
