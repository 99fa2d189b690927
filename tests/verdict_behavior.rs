//! Behavior-driven tests for verdict computation.
//!
//! The verdict path is exercised end to end: store lookup, weather fetch
//! through the real OpenWeather adapter over a canned transport, then the
//! pure classification.

use std::sync::Arc;

use tripcast_core::{
    DestinationService, HttpClient, InMemoryDestinationStore, OpenWeatherAdapter, ServiceError,
    Verdict, WeatherErrorKind, WeatherSource,
};
use tripcast_tests::{service_with_weather, CannedHttpClient, FixedWeather, UnreachableWeather};

fn service_over_provider_body(body: &str) -> DestinationService {
    let adapter = OpenWeatherAdapter::with_http_client(
        Arc::new(CannedHttpClient::ok(body)) as Arc<dyn HttpClient>,
        "test-key",
    );
    DestinationService::new(
        Arc::new(InMemoryDestinationStore::new()),
        Arc::new(adapter) as Arc<dyn WeatherSource>,
    )
}

// =============================================================================
// Verdict: classification against the stored ideal
// =============================================================================

#[tokio::test]
async fn matching_current_and_ideal_is_perfect() {
    // Given: a destination with ideal 25 and a provider reporting 25
    let service = service_over_provider_body(r#"{"main":{"temp":25.0}}"#);
    service.create("Paris", 25.0).await.expect("create");

    // When: the verdict is requested
    let report = service.verdict("Paris").await.expect("verdict succeeds");

    // Then: the verdict is perfect and both temperatures are reported
    assert_eq!(report.verdict, Verdict::Perfect);
    assert_eq!(report.current_temperature.value(), 25.0);
    assert_eq!(report.ideal_temperature.value(), 25.0);
}

#[tokio::test]
async fn warmer_reality_is_too_hot() {
    let service = service_over_provider_body(r#"{"main":{"temp":25.0}}"#);
    service.create("Lisbon", 20.0).await.expect("create");

    let report = service.verdict("Lisbon").await.expect("verdict succeeds");
    assert_eq!(report.verdict, Verdict::TooHot);
}

#[tokio::test]
async fn colder_reality_is_too_cold() {
    let service = service_over_provider_body(r#"{"main":{"temp":25.0}}"#);
    service.create("Helsinki", 30.0).await.expect("create");

    let report = service.verdict("Helsinki").await.expect("verdict succeeds");
    assert_eq!(report.verdict, Verdict::TooCold);
}

// =============================================================================
// Verdict: failure ordering and propagation
// =============================================================================

#[tokio::test]
async fn unknown_destination_fails_before_any_weather_call() {
    // Given: a counting weather fake and an empty catalog
    let weather = Arc::new(FixedWeather::at(25.0));
    let service = service_with_weather(Arc::clone(&weather) as Arc<dyn WeatherSource>);

    // When: a verdict is requested for an unknown name
    let err = service.verdict("Atlantis").await.expect_err("must fail");

    // Then: the failure is NotFound and the weather source was never called
    assert!(matches!(err, ServiceError::NotFound { .. }));
    assert_eq!(weather.call_count(), 0);
}

#[tokio::test]
async fn upstream_failure_surfaces_without_classification() {
    let service = service_with_weather(Arc::new(UnreachableWeather));
    service.create("Paris", 20.0).await.expect("create");

    let err = service.verdict("Paris").await.expect_err("must fail");
    match err {
        ServiceError::Weather(weather_err) => {
            assert_eq!(weather_err.kind(), WeatherErrorKind::Upstream);
        }
        other => panic!("expected a weather error, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_error_status_becomes_an_upstream_error() {
    let adapter = OpenWeatherAdapter::with_http_client(
        Arc::new(CannedHttpClient::status(401, r#"{"message":"bad key"}"#)) as Arc<dyn HttpClient>,
        "wrong-key",
    );
    let service = DestinationService::new(
        Arc::new(InMemoryDestinationStore::new()),
        Arc::new(adapter) as Arc<dyn WeatherSource>,
    );
    service.create("Paris", 20.0).await.expect("create");

    let err = service.verdict("Paris").await.expect_err("must fail");
    match err {
        ServiceError::Weather(weather_err) => {
            assert_eq!(weather_err.kind(), WeatherErrorKind::Upstream);
            assert!(weather_err.message().contains("401"));
        }
        other => panic!("expected a weather error, got {other:?}"),
    }
}

#[tokio::test]
async fn body_without_a_temperature_is_a_malformed_response() {
    let service = service_over_provider_body(r#"{"weather":[{"description":"clear"}]}"#);
    service.create("Paris", 20.0).await.expect("create");

    let err = service.verdict("Paris").await.expect_err("must fail");
    match err {
        ServiceError::Weather(weather_err) => {
            assert_eq!(weather_err.kind(), WeatherErrorKind::MalformedResponse);
        }
        other => panic!("expected a weather error, got {other:?}"),
    }
}

#[tokio::test]
async fn extra_provider_fields_are_ignored() {
    // Real provider bodies carry far more than the temperature.
    let body = r#"{
        "coord": {"lon": 2.32, "lat": 48.86},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
        "main": {"temp": 19.5, "feels_like": 19.1, "pressure": 1021, "humidity": 56},
        "wind": {"speed": 3.6},
        "name": "Paris"
    }"#;
    let service = service_over_provider_body(body);
    service.create("Paris", 19.5).await.expect("create");

    let report = service.verdict("Paris").await.expect("verdict succeeds");
    assert_eq!(report.verdict, Verdict::Perfect);
}
