//! Plain-text and JSON rendering of a weather report.

use serde::Serialize;
use skysense_predict::Prediction;
use skysense_weather::CurrentConditions;

/// Everything shown for one lookup.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub conditions: &'a CurrentConditions,
    pub icon_url: String,
    pub prediction: &'a Prediction,
}

impl<'a> Report<'a> {
    pub fn new(conditions: &'a CurrentConditions, prediction: &'a Prediction) -> Self {
        Self {
            conditions,
            icon_url: conditions.icon_url(),
            prediction,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Floats use `{:?}` so whole values keep their decimal: `22.0°C`, not `22°C`.
pub fn render_conditions(conditions: &CurrentConditions) -> String {
    format!(
        "Icon: {}\n\
         Current weather in {}: {}\n\
         Temperature: {:?}°C, Feels Like: {:?}°C\n\
         Cloudiness: {}%, Wind Speed: {:?} m/s\n",
        conditions.icon_url(),
        conditions.city,
        conditions.display_condition(),
        conditions.temperature,
        conditions.feels_like,
        conditions.cloud_cover,
        conditions.wind_speed,
    )
}

pub fn render_prediction(prediction: &Prediction) -> String {
    let d = &prediction.distribution;
    format!(
        "Rain Prediction\n\
         Rain Probability: {:.2}%\n\
         No Rain Probability: {:.2}%\n\
         Advice: {}\n",
        d.rain_percent(),
        d.no_rain_percent(),
        prediction.advice.message(),
    )
}
