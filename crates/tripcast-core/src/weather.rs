//! Weather source trait and the OpenWeather provider adapter.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::retry::RetryPolicy;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Adapter-level weather failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherErrorKind {
    /// Non-success remote status or transport failure.
    Upstream,
    /// Response body did not carry the expected numeric temperature field.
    MalformedResponse,
}

/// Structured weather adapter error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherError {
    kind: WeatherErrorKind,
    message: String,
    retryable: bool,
}

impl WeatherError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            kind: WeatherErrorKind::Upstream,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: WeatherErrorKind::MalformedResponse,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> WeatherErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            WeatherErrorKind::Upstream => "weather.upstream",
            WeatherErrorKind::MalformedResponse => "weather.malformed_response",
        }
    }
}

impl Display for WeatherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for WeatherError {}

/// Remote source of current temperatures, keyed by location name.
pub trait WeatherSource: Send + Sync {
    fn current_temperature<'a>(
        &'a self,
        location: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<f64, WeatherError>> + Send + 'a>>;
}

/// OpenWeather current-weather adapter.
///
/// One GET per lookup: location as a query parameter, API credential as
/// `appid`, metric units. The temperature lives at `main.temp` in the
/// response body; any shape deviation is a malformed-response error.
#[derive(Clone)]
pub struct OpenWeatherAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    base_url: String,
    timeout_ms: u64,
    retry: RetryPolicy,
}

impl Default for OpenWeatherAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            api_key: std::env::var("TRIPCAST_OPENWEATHER_API_KEY")
                .unwrap_or_else(|_| String::from("demo")),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry: RetryPolicy::disabled(),
        }
    }
}

impl OpenWeatherAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn fetch_once(&self, location: &str) -> Result<f64, WeatherError> {
        let endpoint = format!(
            "{}?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(location),
            self.api_key
        );

        let request = HttpRequest::get(&endpoint).with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|e| {
            WeatherError::upstream(format!("openweather transport error: {}", e.message()))
        })?;

        if !response.is_success() {
            return Err(WeatherError::upstream(format!(
                "openweather returned status {}",
                response.status
            )));
        }

        let payload: CurrentWeatherResponse =
            serde_json::from_str(&response.body).map_err(|e| {
                WeatherError::malformed(format!("failed to parse openweather response: {}", e))
            })?;

        payload
            .main
            .and_then(|readings| readings.temp)
            .ok_or_else(|| WeatherError::malformed("no temperature in openweather response"))
    }
}

impl WeatherSource for OpenWeatherAdapter {
    fn current_temperature<'a>(
        &'a self,
        location: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<f64, WeatherError>> + Send + 'a>> {
        Box::pin(async move {
            let mut attempt = 0;
            loop {
                match self.fetch_once(location).await {
                    Ok(temperature) => return Ok(temperature),
                    Err(err) if err.retryable() && attempt < self.retry.max_retries => {
                        let delay = self.retry.backoff.delay(attempt);
                        debug!(
                            location,
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "retrying weather lookup"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    Err(err) => return Err(err),
                }
            }
        })
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: Option<MainReadings>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: Option<f64>,
}
