//! Integration tests for the `GET /{postal_code}` endpoint
#![allow(clippy::expect_used)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use ziptemp_core::{
    Coordinates, GeocodeError, Geocoder, PostalCode, TemperatureResult, TemperatureService,
    WeatherProvider, WeatherReading,
};
use ziptemp_server::{AppState, ErrorBody, create_router};

/// What the fake geocoder answers.
#[derive(Clone, Copy)]
enum GeocodeOutcome {
    Found(&'static str, &'static str),
    NotFound,
    Fail,
}

struct FakeGeocoder {
    outcome: GeocodeOutcome,
    calls: AtomicUsize,
}

impl FakeGeocoder {
    fn new(outcome: GeocodeOutcome) -> Arc<Self> {
        Arc::new(Self { outcome, calls: AtomicUsize::new(0) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn get_location(&self, _postal_code: &PostalCode) -> Result<Coordinates, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            GeocodeOutcome::Found(lat, lon) => Ok(Coordinates::new(lat, lon)),
            GeocodeOutcome::NotFound => Err(GeocodeError::NotFound),
            GeocodeOutcome::Fail => Err(anyhow::anyhow!("nominatim.example: connection reset").into()),
        }
    }
}

struct FakeWeather {
    reading: Option<WeatherReading>,
    seen: Mutex<Vec<(String, String)>>,
}

impl FakeWeather {
    fn returning(temp_c: f64, temp_f: f64) -> Arc<Self> {
        Arc::new(Self { reading: Some(WeatherReading { temp_c, temp_f }), seen: Mutex::new(Vec::new()) })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self { reading: None, seen: Mutex::new(Vec::new()) })
    }

    fn seen(&self) -> Vec<(String, String)> {
        self.seen.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn get_weather(&self, lat: &str, lon: &str) -> anyhow::Result<WeatherReading> {
        self.seen.lock().expect("lock poisoned").push((lat.to_string(), lon.to_string()));
        self.reading.ok_or_else(|| anyhow::anyhow!("weatherapi.example returned 502"))
    }
}

fn server(geocoder: Arc<FakeGeocoder>, weather: Arc<FakeWeather>) -> TestServer {
    let service = TemperatureService::new(geocoder, weather);
    TestServer::new(create_router(AppState::new(service))).expect("Failed to create test server")
}

#[tokio::test]
async fn invalid_postal_code_returns_422() {
    let geocoder = FakeGeocoder::new(GeocodeOutcome::Found("80", "100"));
    let weather = FakeWeather::returning(20.0, 40.0);
    let server = server(geocoder.clone(), weather.clone());

    let response = server.get("/180862").expect_failure().await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = response.json();
    assert_eq!(body, ErrorBody { message: "invalid zipcode".into(), code: 422 });
    assert_eq!(geocoder.calls(), 0);
    assert!(weather.seen().is_empty());
}

#[tokio::test]
async fn non_utf8_segment_returns_422_json() {
    let geocoder = FakeGeocoder::new(GeocodeOutcome::Found("80", "100"));
    let weather = FakeWeather::returning(20.0, 40.0);
    let server = server(geocoder.clone(), weather.clone());

    let response = server.get("/%FF%FF%FF%FF%FF%FF%FF%FF").expect_failure().await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let content_type = response.header("content-type");
    assert_eq!(content_type.to_str().expect("ascii header"), "application/json");
    let body: ErrorBody = response.json();
    assert_eq!(body, ErrorBody { message: "invalid zipcode".into(), code: 422 });
    assert_eq!(geocoder.calls(), 0);
    assert!(weather.seen().is_empty());
}

#[tokio::test]
async fn multibyte_eight_char_segment_returns_422() {
    let geocoder = FakeGeocoder::new(GeocodeOutcome::Found("80", "100"));
    let weather = FakeWeather::returning(20.0, 40.0);
    let server = server(geocoder.clone(), weather.clone());

    // "1234567é": eight chars, nine bytes
    let response = server.get("/1234567%C3%A9").expect_failure().await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(geocoder.calls(), 0);
}

#[tokio::test]
async fn unknown_postal_code_returns_404() {
    let geocoder = FakeGeocoder::new(GeocodeOutcome::NotFound);
    let weather = FakeWeather::returning(20.0, 40.0);
    let server = server(geocoder.clone(), weather.clone());

    let response = server.get("/00000000").expect_failure().await;

    response.assert_status_not_found();
    let body: ErrorBody = response.json();
    assert_eq!(body, ErrorBody { message: "can not find zipcode".into(), code: 404 });
    assert_eq!(geocoder.calls(), 1);
    assert!(weather.seen().is_empty());
}

#[tokio::test]
async fn geocoder_failure_returns_500_without_details() {
    let geocoder = FakeGeocoder::new(GeocodeOutcome::Fail);
    let weather = FakeWeather::returning(20.0, 40.0);
    let server = server(geocoder.clone(), weather.clone());

    let response = server.get("/00000000").expect_failure().await;

    response.assert_status_internal_server_error();
    let body: ErrorBody = response.json();
    assert_eq!(body, ErrorBody { message: "internal error".into(), code: 500 });
    assert!(!response.text().contains("nominatim"));
    assert_eq!(geocoder.calls(), 1);
    assert!(weather.seen().is_empty());
}

#[tokio::test]
async fn weather_failure_returns_500() {
    let geocoder = FakeGeocoder::new(GeocodeOutcome::Found("80", "100"));
    let weather = FakeWeather::failing();
    let server = server(geocoder.clone(), weather.clone());

    let response = server.get("/11111111").expect_failure().await;

    response.assert_status_internal_server_error();
    let body: ErrorBody = response.json();
    assert_eq!(body, ErrorBody { message: "internal error".into(), code: 500 });
    assert!(!response.text().contains("502"));
    assert_eq!(geocoder.calls(), 1);
    assert_eq!(weather.seen(), vec![("80".to_string(), "100".to_string())]);
}

#[tokio::test]
async fn success_returns_all_three_scales() {
    let geocoder = FakeGeocoder::new(GeocodeOutcome::Found("80", "100"));
    let weather = FakeWeather::returning(20.0, 40.0);
    let server = server(geocoder.clone(), weather.clone());

    let response = server.get("/00000000").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert_eq!(content_type.to_str().expect("ascii header"), "application/json");

    let body: TemperatureResult = response.json();
    assert_eq!(body, TemperatureResult { temp_c: 20.0, temp_f: 40.0, temp_k: 293.0 });
    response.assert_json(&serde_json::json!({ "temp_c": 20.0, "temp_f": 40.0, "temp_k": 293.0 }));

    assert_eq!(geocoder.calls(), 1);
    assert_eq!(weather.seen(), vec![("80".to_string(), "100".to_string())]);
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let geocoder = FakeGeocoder::new(GeocodeOutcome::Found("80", "100"));
    let weather = FakeWeather::returning(-12.5, 9.5);
    let server = server(geocoder.clone(), weather);

    let first: TemperatureResult = server.get("/01310100").await.json();
    let second: TemperatureResult = server.get("/01310100").await.json();

    assert_eq!(first, second);
    assert_eq!(first.temp_k, 260.5);
    assert_eq!(geocoder.calls(), 2);
}
