use crate::error::{ApiError, ApiResult};
use crate::types::{Recommendation, RecommendRequest, RecommendResponse};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://ghohlov.pythonanywhere.com/recommend";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Anything that can turn a flavor/brew selection into recommendations.
pub trait RecommendationSource {
    fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> impl Future<Output = ApiResult<Vec<Recommendation>>> + Send;
}

#[derive(Clone)]
pub struct RecommendApi {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl RecommendApi {
    pub fn new(endpoint: &str, timeout: Duration) -> ApiResult<Self> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()
            .unwrap_or_else(|_| Client::new());
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn recommend(&self, request: &RecommendRequest) -> ApiResult<Vec<Recommendation>> {
        debug!(
            endpoint = %self.endpoint,
            flavors = request.flavors.len(),
            brew_method = %request.brew_method,
            "requesting recommendations"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recommendation request failed: {}", status);
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify_send_error(e))?;
        let data: RecommendResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(count = data.recommendations.len(), "received recommendations");
        Ok(data.recommendations)
    }

    fn classify_send_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout(format!("no response within {}s", self.timeout.as_secs()))
        } else {
            ApiError::Network(error)
        }
    }
}

impl RecommendationSource for RecommendApi {
    fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> impl Future<Output = ApiResult<Vec<Recommendation>>> + Send {
        RecommendApi::recommend(self, request)
    }
}

/// Accepts only absolute http(s) URLs.
pub fn parse_endpoint(raw: &str) -> ApiResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::Endpoint(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::Endpoint(format!(
            "{raw}: unsupported scheme {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_valid() {
        let api = RecommendApi::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT).expect("default endpoint");
        assert_eq!(api.endpoint().path(), "/recommend");
    }

    #[test]
    fn rejects_non_http_endpoints() {
        assert!(matches!(
            parse_endpoint("ftp://example.com/recommend"),
            Err(ApiError::Endpoint(_))
        ));
        assert!(matches!(
            parse_endpoint("not a url"),
            Err(ApiError::Endpoint(_))
        ));
        assert!(parse_endpoint(" http://localhost:5000/recommend ").is_ok());
    }
}
