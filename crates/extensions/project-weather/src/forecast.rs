//! Forecast data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rain,
    Storm,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rain => "Rain",
            Condition::Storm => "Thunderstorms",
        }
    }
}

/// One day of forecast, temperatures in Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub day: String,
    pub condition: Condition,
    pub high_c: f64,
    pub low_c: f64,
}

impl DailyForecast {
    pub fn new(day: impl Into<String>, condition: Condition, high_c: f64, low_c: f64) -> Self {
        Self {
            day: day.into(),
            condition,
            high_c,
            low_c,
        }
    }
}

pub(crate) fn sample() -> Vec<DailyForecast> {
    vec![
        DailyForecast::new("Mon", Condition::Sunny, 24.0, 15.0),
        DailyForecast::new("Tue", Condition::Cloudy, 21.0, 14.0),
        DailyForecast::new("Wed", Condition::Rain, 18.0, 12.0),
        DailyForecast::new("Thu", Condition::Storm, 17.0, 11.0),
        DailyForecast::new("Fri", Condition::Sunny, 23.0, 14.0),
    ]
}
