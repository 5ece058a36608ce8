//! HTTP collaborator used by the whole-pair step.
//!
//! A thin layer over `reqwest`: any HTTP status counts as a completed fetch,
//! only connection and protocol problems fail.
use std::time::Duration;

use reqwest::{Client, Response, Url};

const USER_AGENT: &str = concat!("hello-ves/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues `GET` requests on behalf of the demonstration.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http_client: Client,
}

impl Fetcher {
    /// Builds a fetcher with the demo's user agent and request timeout.
    ///
    /// # Errors
    ///
    /// Returns the [`reqwest::Error`] raised when the TLS backend cannot be
    /// initialised.
    pub fn new() -> reqwest::Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http_client })
    }

    /// Fetches `url` and returns the response with its body still unread.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] when the connection or the exchange fails
    /// or times out. HTTP error statuses are not failures.
    pub async fn fetch(&self, url: Url) -> reqwest::Result<Response> {
        self.http_client.get(url).send().await
    }
}

/// Reads the body of `response` as JSON.
///
/// # Errors
///
/// Returns a [`reqwest::Error`] when the body cannot be read or is not JSON.
pub async fn json(response: Response) -> reqwest::Result<serde_json::Value> {
    response.json().await
}
