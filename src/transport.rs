//! HTTP transport for the tracker REST API
//!
//! Wraps a reqwest client with the fixed API base URL and the Authorization
//! header. Everything above this layer works with paths relative to
//! `/rest/api/2`.

use crate::{Result, TransitError};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client-wide request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated HTTP transport with a fixed base URL
pub struct Transport {
    client: Client,
    base_url: String,
    auth_header: String,
}

impl Transport {
    /// Create a transport rooted at `{base_url}/rest/api/2`.
    ///
    /// The token is sent verbatim in a `Basic` Authorization header; it is
    /// not base64-encoded here.
    pub fn new(base_url: &str, api_token: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: format!("{}/rest/api/2", base_url.trim_end_matches('/')),
            auth_header: format!("Basic {}", api_token),
        })
    }

    /// Issue an authenticated GET and deserialize the response body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => Err(Self::error_for(status, response).await),
        }
    }

    /// Issue an authenticated POST with a JSON body
    ///
    /// Success responses carry no meaningful body and are discarded.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_for(status, response).await)
        }
    }

    async fn error_for(status: StatusCode, response: reqwest::Response) -> TransitError {
        match status {
            StatusCode::NOT_FOUND => {
                TransitError::IssueNotFound(response.url().path().to_string())
            }
            StatusCode::UNAUTHORIZED => {
                TransitError::Auth("tracker rejected the credential".to_string())
            }
            _ => {
                let error_body = response.text().await.unwrap_or_default();
                TransitError::Integration(format!("HTTP {}: {}", status, error_body))
            }
        }
    }
}
