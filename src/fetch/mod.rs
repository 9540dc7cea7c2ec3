//! HTTP fetcher
//!
//! This module handles all HTTP requests for the tool:
//! - Building the HTTP client with the configured user agent and timeouts
//! - Issuing one GET per page and classifying failures
//!
//! There is deliberately no retry logic here; retry policy, if any,
//! belongs to callers (none in current scope).

use crate::config::FetcherConfig;
use crate::TransportError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for every request
///
/// # Arguments
///
/// * `config` - The fetcher configuration (user agent, request timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body text
///
/// One blocking round trip from the caller's point of view: the request
/// is awaited to completion before returning. Non-success status codes
/// are failures; there is no retry.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - Absolute URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - Response body
/// * `Err(TransportError)` - Connection failure, timeout, or non-success status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, TransportError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_request_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| classify_request_error(url, e))
}

/// Maps a reqwest error onto the transport taxonomy
fn classify_request_error(url: &str, error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        TransportError::Connect {
            url: url.to_string(),
        }
    } else {
        TransportError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetcherConfig;

    #[test]
    fn test_build_http_client() {
        let config = FetcherConfig::default();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        use wiremock::matchers::{header_exists, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let client = build_http_client(&FetcherConfig::default()).unwrap();
        let body = fetch_page(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_fetch_page_http_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&FetcherConfig::default()).unwrap();
        let err = fetch_page(&client, &format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        // Port 1 is never listening
        let client = build_http_client(&FetcherConfig::default()).unwrap();
        let err = fetch_page(&client, "http://127.0.0.1:1/")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TransportError::Connect { .. } | TransportError::Request { .. }
        ));
    }
}
