//! Condition icon URLs.

const ICON_URL_BASE: &str = "http://openweathermap.org/img/wn";

/// Display URL for an OpenWeatherMap icon id (e.g. "10d"). The id is not validated.
pub fn icon_url(icon_id: &str) -> String {
    format!("{}/{}.png", ICON_URL_BASE, icon_id)
}
