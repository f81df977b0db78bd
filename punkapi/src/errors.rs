//! Error types for the API client.

use crate::version::ApiVersion;

/// Errors that can occur when building or sending Punk API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The requested API version has been retired and cannot be queried.
    #[error("API version {0} is retired and can no longer be queried")]
    UnsupportedVersion(ApiVersion),
    /// The endpoint could not be parsed as a URL (usually a bad base URL).
    #[error("Invalid endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },
    /// The request never produced a response (network error, timeout, client setup).
    #[error("Request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the JSON shape we expected.
    #[error("Failed to decode response: {message}")]
    Decode { message: String, body: String },
    /// A brew date string was not in `mm-yyyy` form.
    #[error("Invalid brew date '{0}', expected mm-yyyy")]
    InvalidBrewDate(String),
}

impl Error {
    /// HTTP status returned by the service, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the service answered with a non-success status.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }

    /// True when the service answered but the payload could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_for_http_errors() {
        let err = Error::HttpStatus {
            status: 400,
            body: "bad abv".to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert!(err.is_remote());
        assert!(!err.is_decode());

        let err = Error::Decode {
            message: "expected value".to_string(),
            body: "<html>".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.is_decode());
        assert!(!err.is_remote());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::UnsupportedVersion(ApiVersion::V1).to_string(),
            "API version v1 is retired and can no longer be queried"
        );
        assert_eq!(
            Error::HttpStatus {
                status: 404,
                body: String::new()
            }
            .to_string(),
            "Request failed with status 404"
        );
        assert_eq!(
            Error::InvalidBrewDate("2011".to_string()).to_string(),
            "Invalid brew date '2011', expected mm-yyyy"
        );
    }
}
