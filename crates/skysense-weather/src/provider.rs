//! OpenWeatherMap current-weather client.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{CurrentConditions, WeatherError};

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const FALLBACK_ERROR_MESSAGE: &str = "Error fetching weather data";

/// Connection settings for [`WeatherProvider`].
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    clouds: OwmClouds,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, WeatherError> {
        let api_key = settings
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(WeatherError::MissingApiKey)?;

        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetch current conditions for `city`. No retries.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(&body);
            tracing::warn!("Weather API returned {}: {}", status, message);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let conditions = parse_current(city, &body)?;
        tracing::info!(
            condition = %conditions.condition,
            temperature = conditions.temperature,
            "Fetched current weather"
        );
        Ok(conditions)
    }
}

/// The `message` field of an error body, or a generic message.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<OwmErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

fn parse_current(city: &str, body: &str) -> Result<CurrentConditions, WeatherError> {
    let parsed: OwmResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Parse("response has no weather entries".to_string()))?;

    Ok(CurrentConditions {
        city: city.to_string(),
        condition: weather.description,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        cloud_cover: parsed.clouds.all,
        wind_speed: parsed.wind.speed,
        icon_id: weather.icon,
        fetched_at: Utc::now(),
    })
}
