use std::time::Duration;

use crate::{ShortenError, ShortenedLink};

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ShortenService: Send + Sync {
    async fn shorten(&self, long_url: &str) -> Result<ShortenedLink, ShortenError>;
}

/// HTTP client for the shortening service.
///
/// The displayed short URL is `{base_url}/{short_code}`, so the configured
/// origin must be the one the service serves redirects from.
#[derive(Debug, Clone)]
pub struct HttpShortenService {
    base_url: String,
    client: reqwest::Client,
}

#[derive(serde::Serialize)]
struct ShortenRequestBody<'a> {
    long_url: &'a str,
}

#[derive(serde::Deserialize)]
struct ShortenResponseBody {
    long_url: String,
    short_code: String,
}

impl HttpShortenService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ShortenError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ShortenError::Network(err.to_string()))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> Result<reqwest::Url, ShortenError> {
        reqwest::Url::parse(&format!("{}/api/shorten/", self.base_url))
            .map_err(|err| ShortenError::InvalidEndpoint(err.to_string()))
    }
}

#[async_trait::async_trait]
impl ShortenService for HttpShortenService {
    async fn shorten(&self, long_url: &str) -> Result<ShortenedLink, ShortenError> {
        let response = self
            .client
            .post(self.endpoint()?)
            .json(&ShortenRequestBody { long_url })
            .send()
            .await
            .map_err(|err| map_reqwest_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::HttpStatus(status.as_u16()));
        }

        let body: ShortenResponseBody = response
            .json()
            .await
            .map_err(|err| map_reqwest_error(err))?;

        Ok(ShortenedLink {
            original_url: body.long_url,
            short_url: format!("{}/{}", self.base_url, body.short_code),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ShortenError {
    if err.is_timeout() {
        return ShortenError::Timeout;
    }
    if err.is_decode() {
        return ShortenError::MalformedResponse(err.to_string());
    }
    ShortenError::Network(err.to_string())
}
