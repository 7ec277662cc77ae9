//! # Rates Client
//!
//! A typed client for the remote exchange rate API
//! (`GET <api_url>?app_id=<api_id>`, JSON body with a `rates` object).

use std::time::Duration;

use rates_types::{ApiConfig, ExchangeRateTable, FetchError, RateSource, RatesDocument};
use reqwest::{Client, Url};

/// Read timeout for the single rate request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Exchange rate API client.
pub struct RatesClient {
    http: Client,
    timeout: Duration,
}

impl RatesClient {
    /// Creates a new client with the default timeout.
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the request URL, keeping any query the configured URL
    /// already carries.
    pub fn request_url(config: &ApiConfig) -> Url {
        let mut url = config.api_url().clone();
        url.query_pairs_mut().append_pair("app_id", config.api_id());
        url
    }

    async fn handle_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<ExchangeRateTable, FetchError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let doc: RatesDocument = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
        Ok(doc.rates)
    }
}

impl Default for RatesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RateSource for RatesClient {
    async fn fetch(&self, config: &ApiConfig) -> Result<ExchangeRateTable, FetchError> {
        let url = Self::request_url(config);
        // Keep the key out of the logs.
        tracing::debug!(
            host = config.api_url().host_str().unwrap_or_default(),
            path = config.api_url().path(),
            "Requesting exchange rates"
        );

        let resp = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        let table = self.handle_response(resp).await?;
        tracing::debug!(currencies = table.len(), "Received exchange rates");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
    use rates_types::CurrencyCode;

    use super::*;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/latest.json", addr)
    }

    fn config(url: &str) -> ApiConfig {
        ApiConfig::new(url, "testkey123").unwrap()
    }

    #[test]
    fn test_request_url_appends_app_id() {
        let config = config("https://openexchangerates.org/api/latest.json");
        assert_eq!(
            RatesClient::request_url(&config).as_str(),
            "https://openexchangerates.org/api/latest.json?app_id=testkey123"
        );
    }

    #[test]
    fn test_request_url_keeps_existing_query() {
        let config = config("https://example.com/latest?base=USD");
        assert_eq!(
            RatesClient::request_url(&config).as_str(),
            "https://example.com/latest?base=USD&app_id=testkey123"
        );
    }

    #[test]
    fn test_default_timeout() {
        let client = RatesClient::new();
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let router = Router::new().route(
            "/api/latest.json",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("app_id").map(String::as_str), Some("testkey123"));
                Json(serde_json::json!({
                    "base": "USD",
                    "rates": {"USD": 1, "EUR": 0.9, "BYN": 3.27}
                }))
            }),
        );
        let url = serve(router).await;

        let table = RatesClient::new().fetch(&config(&url)).await.unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&CurrencyCode::parse("EUR").unwrap()), Some(0.9));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let router = Router::new().route("/other", get(|| async { "nope" }));
        let url = serve(router).await;

        let result = RatesClient::new().fetch(&config(&url)).await;

        assert!(matches!(result, Err(FetchError::Http { status: 404 })));
    }

    #[tokio::test]
    async fn test_fetch_unauthorized() {
        let router = Router::new().route(
            "/api/latest.json",
            get(|| async { (StatusCode::UNAUTHORIZED, r#"{"error": true}"#) }),
        );
        let url = serve(router).await;

        let result = RatesClient::new().fetch(&config(&url)).await;

        assert!(matches!(result, Err(FetchError::Http { status: 401 })));
    }

    #[tokio::test]
    async fn test_fetch_without_rates() {
        let router = Router::new().route(
            "/api/latest.json",
            get(|| async { Json(serde_json::json!({"base": "USD"})) }),
        );
        let url = serve(router).await;

        let result = RatesClient::new().fetch(&config(&url)).await;

        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_fetch_non_json_body() {
        let router = Router::new().route("/api/latest.json", get(|| async { "<html></html>" }));
        let url = serve(router).await;

        let result = RatesClient::new().fetch(&config(&url)).await;

        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let router = Router::new().route(
            "/api/latest.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(serde_json::json!({"rates": {"USD": 1}}))
            }),
        );
        let url = serve(router).await;

        let client = RatesClient::new().with_timeout(Duration::from_millis(100));
        let result = client.fetch(&config(&url)).await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = RatesClient::new()
            .fetch(&config(&format!("http://{}/api/latest.json", addr)))
            .await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
