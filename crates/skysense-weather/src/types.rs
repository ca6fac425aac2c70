use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::icon_url;

/// Current conditions for one city, in metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City as entered by the user
    pub city: String,
    /// Provider's condition description, e.g. "few clouds"
    pub condition: String,
    /// °C
    pub temperature: f64,
    /// °C
    pub feels_like: f64,
    /// Percent, 0-100
    pub cloud_cover: u8,
    /// m/s
    pub wind_speed: f64,
    /// Provider icon id, e.g. "02d"
    pub icon_id: String,
    pub fetched_at: DateTime<Utc>,
}

impl CurrentConditions {
    /// Condition with its first letter upper-cased, for display.
    pub fn display_condition(&self) -> String {
        let mut chars = self.condition.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn icon_url(&self) -> String {
        icon_url(&self.icon_id)
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("City name is empty")]
    EmptyCity,
    #[error("No weather API key configured")]
    MissingApiKey,
}
