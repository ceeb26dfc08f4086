//! # Showcase Project Weather
//!
//! A multi-day forecast table for one location.
//!
//! Readings are stored in Celsius and converted to the configured unit when
//! the view renders.

mod forecast;

pub use forecast::{Condition, DailyForecast};
pub use showcase_protocols::{TemperatureUnit, UnknownUnitError};

use std::fmt::Write;

use showcase_protocols::{escape_html, Fragment, ProjectId, ViewProvider};

/// Forecast view.
pub struct WeatherView {
    title: String,
    location: String,
    unit: TemperatureUnit,
    forecast: Vec<DailyForecast>,
}

impl WeatherView {
    pub fn new(location: impl Into<String>, unit: TemperatureUnit, forecast: Vec<DailyForecast>) -> Self {
        Self {
            title: "Project Weather".to_string(),
            location: location.into(),
            unit,
            forecast,
        }
    }

    /// View with the bundled sample forecast.
    pub fn with_sample_forecast(location: impl Into<String>, unit: TemperatureUnit) -> Self {
        Self::new(location, unit, forecast::sample())
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }
}

impl ViewProvider for WeatherView {
    fn id(&self) -> ProjectId {
        ProjectId::ProjectWeather
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self) -> Fragment {
        let mut html = String::new();
        let _ = write!(
            html,
            "<main class=\"project project-weather\"><h1>{}</h1>",
            escape_html(&self.title)
        );
        if !self.location.trim().is_empty() {
            let _ = write!(html, "<h2>{}</h2>", escape_html(&self.location));
        }

        if self.forecast.is_empty() {
            html.push_str("<p class=\"empty\">No forecast available.</p></main>");
            return Fragment::new(html);
        }

        html.push_str(
            "<table><thead><tr><th>Day</th><th>Conditions</th><th>High</th><th>Low</th></tr></thead><tbody>",
        );
        for day in &self.forecast {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&day.day),
                day.condition.label(),
                self.unit.format(day.high_c),
                self.unit.format(day.low_c),
            );
        }
        html.push_str("</tbody></table></main>");

        Fragment::new(html)
    }
}
