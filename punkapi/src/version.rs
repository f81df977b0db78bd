//! API versions and the base endpoint each one resolves to.

use std::fmt;
use std::str::FromStr;

/// Host serving the Punk API.
pub const DEFAULT_HOST: &str = "https://api.punkapi.com";

/// Published versions of the Punk API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The first API. Retired; requests are refused at construction.
    V1,
    /// The current API, which also accepts the `ids` filter.
    #[default]
    V2,
}

impl ApiVersion {
    /// Path segment placed between the host and `/beers`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }

    /// Whether the service has stopped answering this version.
    pub fn is_retired(&self) -> bool {
        matches!(self, ApiVersion::V1)
    }

    /// Base beers endpoint for this version on `host`, e.g. `https://api.punkapi.com/v2/beers`.
    pub fn base_endpoint(&self, host: &str) -> String {
        format!("{}/{}/beers", host.trim_end_matches('/'), self.path_segment())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(ApiVersion::V1),
            "v2" | "2" => Ok(ApiVersion::V2),
            other => Err(format!("unknown API version '{}'", other)),
        }
    }
}
