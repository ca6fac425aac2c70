//! Weather lookup for SkySense
//!
//! Fetches current conditions for a city from the OpenWeatherMap API and
//! resolves condition icons to display URLs.

pub mod icon;
pub mod provider;
pub mod types;

pub use icon::icon_url;
pub use provider::{ProviderSettings, WeatherProvider};
pub use types::*;
