//! HTTP transport for the Punk API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{credential::Credential, Error};

const USER_AGENT: &str = concat!("punkapi-rs/", env!("CARGO_PKG_VERSION"));

/// Sends authenticated GET requests and decodes JSON bodies.
///
/// Each request builds a fresh `reqwest::Client` with the configured timeout
/// (30 seconds by default). Failures are returned as-is; nothing is retried
/// or cached.
#[derive(Clone, Debug)]
pub struct Client {
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn http(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e)
            })
    }

    /// Fetches `url` and returns the raw body of a successful response.
    pub async fn get_text(&self, url: &Url, credential: &Credential) -> Result<String, Error> {
        tracing::debug!("GET {}", url);
        let (username, password) = credential.basic_auth();
        let resp = self
            .http()?
            .get(url.clone())
            .basic_auth(username, Some(password))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    /// Fetches `url` and decodes the body as `T`.
    pub async fn get_json<T>(&self, url: &Url, credential: &Credential) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let body = self.get_text(url, credential).await?;
        decode(&body)
    }
}

/// Decodes a response body, keeping a snippet of it on failure.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::Decode {
            message: e.to_string(),
            body: snippet,
        }
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Beer;

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_body("[]"), "[]");
    }

    #[test]
    fn truncate_long_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn decode_failure_is_a_decode_error() {
        let err = decode::<Vec<Beer>>("{not valid json}").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn decode_wrong_shape_is_a_decode_error() {
        let err = decode::<Vec<Beer>>(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
