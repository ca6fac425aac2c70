//! Maps crate errors to skysense_core::AppError for consistent user-facing messages.

use skysense_core::error::ReqwestErrorExt;
use skysense_core::{AppError, ConfigError, NetworkError, PredictionError, WeatherError};
use skysense_predict::PredictError;
use skysense_weather::WeatherError as FetchError;

/// Conversion into the application error hierarchy.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}

impl IntoAppError for FetchError {
    fn into_app_error(self) -> AppError {
        match self {
            FetchError::Network(err) => AppError::Network(err.into_network_error()),
            FetchError::Api { status: 401, .. } => AppError::Weather(WeatherError::InvalidApiKey),
            FetchError::Api {
                status: 404,
                message,
            } => AppError::Weather(WeatherError::CityNotFound(message)),
            FetchError::Api { status, message } if status >= 500 => {
                AppError::Network(NetworkError::ServerError { status, message })
            }
            FetchError::Api { message, .. } => AppError::Weather(WeatherError::ApiError(message)),
            FetchError::Parse(msg) => AppError::Network(NetworkError::InvalidResponse(msg)),
            FetchError::EmptyCity => AppError::Weather(WeatherError::EmptyCity),
            FetchError::MissingApiKey => AppError::Config(ConfigError::MissingSetting(format!(
                "weather.api_key (or {})",
                skysense_core::API_KEY_ENV
            ))),
        }
    }
}

impl IntoAppError for PredictError {
    fn into_app_error(self) -> AppError {
        match self {
            PredictError::UnknownConfidenceLabel(label) => {
                AppError::Prediction(PredictionError::UnknownConfidenceLabel(label))
            }
            other => AppError::Prediction(PredictionError::InvalidConfidence(other.to_string())),
        }
    }
}

/// Message shown when a request fails: the user message, plus the API's own
/// wording when it sent one.
pub fn failure_message(err: &AppError) -> String {
    let detail = match err {
        AppError::Weather(WeatherError::CityNotFound(msg) | WeatherError::ApiError(msg)) => {
            Some(msg.as_str())
        }
        AppError::Network(NetworkError::ServerError { message, .. }) => Some(message.as_str()),
        _ => None,
    };

    match detail {
        Some(d) if !d.is_empty() => format!("{} ({})", err.user_message(), d),
        _ => err.user_message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_api_message() {
        let err = FetchError::Api {
            status: 404,
            message: "city not found".into(),
        }
        .into_app_error();

        assert!(matches!(err, AppError::Weather(WeatherError::CityNotFound(_))));
        assert_eq!(
            failure_message(&err),
            "City not found. Check the spelling and try again. (city not found)"
        );
    }

    #[test]
    fn test_unauthorized_is_invalid_key() {
        let err = FetchError::Api {
            status: 401,
            message: "Invalid API key".into(),
        }
        .into_app_error();
        assert!(matches!(err, AppError::Weather(WeatherError::InvalidApiKey)));
        assert_eq!(failure_message(&err), "Weather API key is invalid. Check settings.");
    }

    #[test]
    fn test_server_errors_map_to_network() {
        let err = FetchError::Api {
            status: 503,
            message: "Error fetching weather data".into(),
        }
        .into_app_error();
        assert!(matches!(
            err,
            AppError::Network(NetworkError::ServerError { status: 503, .. })
        ));
    }

    #[test]
    fn test_other_api_errors_keep_message() {
        let err = FetchError::Api {
            status: 400,
            message: "Nothing to geocode".into(),
        }
        .into_app_error();
        assert!(failure_message(&err).ends_with("(Nothing to geocode)"));
    }

    #[test]
    fn test_parse_error_is_invalid_response() {
        let err = FetchError::Parse("missing field `main`".into()).into_app_error();
        assert!(matches!(err, AppError::Network(NetworkError::InvalidResponse(_))));
        assert_eq!(
            failure_message(&err),
            "Received an unexpected response. Please try again."
        );
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = FetchError::MissingApiKey.into_app_error();
        assert!(matches!(err, AppError::Config(ConfigError::MissingSetting(_))));
    }

    #[test]
    fn test_predict_errors() {
        let err = PredictError::InvalidConfidence(f64::NAN).into_app_error();
        assert!(matches!(
            err,
            AppError::Prediction(PredictionError::InvalidConfidence(_))
        ));

        let err = PredictError::UnknownConfidenceLabel("maybe".into()).into_app_error();
        assert!(matches!(
            err,
            AppError::Prediction(PredictionError::UnknownConfidenceLabel(_))
        ));
    }
}
