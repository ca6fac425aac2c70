//! Integration tests for WeatherProvider using wiremock.

use std::time::Duration;

use skysense_weather::{ProviderSettings, WeatherError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> WeatherProvider {
    WeatherProvider::new(ProviderSettings {
        base_url: server.uri(),
        api_key: Some("test-key".into()),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn current_weather(description: &str, icon: &str) -> serde_json::Value {
    serde_json::json!({
        "weather": [{"id": 800, "main": "Clear", "description": description, "icon": icon}],
        "main": {"temp": 24.2, "feels_like": 25.0, "pressure": 1012, "humidity": 40},
        "clouds": {"all": 0},
        "wind": {"speed": 2.1},
        "name": "Lisbon",
        "cod": 200
    })
}

#[tokio::test]
async fn test_fetch_current_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Lisbon"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather("clear sky", "01d")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let conditions = provider.fetch_current("Lisbon").await.unwrap();

    assert_eq!(conditions.city, "Lisbon");
    assert_eq!(conditions.condition, "clear sky");
    assert_eq!(conditions.display_condition(), "Clear sky");
    assert_eq!(conditions.temperature, 24.2);
    assert_eq!(conditions.feels_like, 25.0);
    assert_eq!(conditions.cloud_cover, 0);
    assert_eq!(conditions.wind_speed, 2.1);
    assert_eq!(conditions.icon_url(), "http://openweathermap.org/img/wn/01d.png");
}

#[tokio::test]
async fn test_fetch_current_trims_city() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather("mist", "50n")))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let conditions = provider.fetch_current("  New York ").await.unwrap();

    assert_eq!(conditions.city, "New York");
    assert_eq!(conditions.icon_id, "50n");
}

#[tokio::test]
async fn test_api_error_carries_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_current("Atlantis").await.unwrap_err();

    match err {
        WeatherError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_without_message_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_current("Paris").await.unwrap_err();

    assert!(
        matches!(&err, WeatherError::Api { status: 502, message } if message == "Error fetching weather data"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_invalid_key_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_current("Paris").await.unwrap_err();

    assert!(matches!(err, WeatherError::Api { status: 401, .. }));
}

#[tokio::test]
async fn test_malformed_payload_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": [{"description": "rain"}]
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_current("Oslo").await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn test_empty_weather_array_is_parse_error() {
    let mock_server = MockServer::start().await;

    let mut body = current_weather("rain", "10d");
    body["weather"] = serde_json::json!([]);

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.fetch_current("Oslo").await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(current_weather("clear sky", "01d"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let provider = WeatherProvider::new(ProviderSettings {
        base_url: mock_server.uri(),
        api_key: Some("test-key".into()),
        timeout: Duration::from_millis(200),
    })
    .unwrap();

    let err = provider.fetch_current("Lisbon").await.unwrap_err();
    match err {
        WeatherError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected Network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on port 1
    let provider = WeatherProvider::new(ProviderSettings {
        base_url: "http://127.0.0.1:1".into(),
        api_key: Some("test-key".into()),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = provider.fetch_current("Lisbon").await.unwrap_err();
    assert!(matches!(err, WeatherError::Network(_)));
}
