//! Connection settings resolved from flags, the environment and `.env`.

use std::time::Duration;

use anyhow::{anyhow, Result};
use punkapi::{ApiVersion, Client, PunkApi, DEFAULT_HOST, DEFAULT_KEY};

pub const KEY_VAR: &str = "PUNKAPI_KEY";
pub const BASE_URL_VAR: &str = "PUNKAPI_BASE_URL";

/// Holds the API key in the clear; keep it out of logs.
pub struct Settings {
    api_key: String,
    base_url: String,
    version: ApiVersion,
    timeout: Duration,
}

impl Settings {
    /// Flags win over the environment, the environment over built-in defaults.
    pub fn resolve(
        api_key: Option<&str>,
        base_url: Option<&str>,
        version: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        Self::resolve_with(api_key, base_url, version, timeout_secs, |key| {
            std::env::var(key).ok()
        })
    }

    fn resolve_with<F>(
        api_key: Option<&str>,
        base_url: Option<&str>,
        version: &str,
        timeout_secs: u64,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = api_key
            .map(str::to_string)
            .or_else(|| env(KEY_VAR))
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_KEY.to_string());
        let base_url = base_url
            .map(str::to_string)
            .or_else(|| env(BASE_URL_VAR))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let version = version.parse::<ApiVersion>().map_err(|e| anyhow!(e))?;
        if timeout_secs == 0 {
            return Err(anyhow!("timeout must be at least one second"));
        }
        Ok(Self {
            api_key,
            base_url,
            version,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Builds the query builder, refusing retired API versions.
    pub fn build_api(&self) -> Result<PunkApi> {
        let api = PunkApi::with_base_url_and_version(
            &self.base_url,
            self.api_key.as_str(),
            self.version,
        )?;
        Ok(api.with_client(Client::with_timeout(self.timeout)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let settings = Settings::resolve_with(None, None, "v2", 30, no_env).unwrap();
        assert_eq!(settings.api_key, DEFAULT_KEY);
        assert_eq!(settings.base_url, DEFAULT_HOST);
        assert_eq!(settings.version, ApiVersion::V2);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn env_fills_missing_flags() {
        let env = |key: &str| match key {
            KEY_VAR => Some("from-env".to_string()),
            BASE_URL_VAR => Some("http://localhost:9000".to_string()),
            _ => None,
        };
        let settings = Settings::resolve_with(None, None, "v2", 30, env).unwrap();
        assert_eq!(settings.api_key, "from-env");
        assert_eq!(settings.base_url, "http://localhost:9000");

        let settings =
            Settings::resolve_with(Some("from-flag"), Some("http://a"), "v2", 30, env).unwrap();
        assert_eq!(settings.api_key, "from-flag");
        assert_eq!(settings.base_url, "http://a");
    }

    #[test]
    fn retired_version_fails_at_build() {
        let settings = Settings::resolve_with(None, None, "v1", 30, no_env).unwrap();
        assert!(settings.build_api().is_err());
    }

    #[test]
    fn unknown_version_and_zero_timeout_rejected() {
        assert!(Settings::resolve_with(None, None, "v9", 30, no_env).is_err());
        assert!(Settings::resolve_with(None, None, "v2", 0, no_env).is_err());
    }

    #[test]
    fn build_api_uses_base_url() {
        let settings =
            Settings::resolve_with(None, Some("http://localhost:9000"), "v2", 5, no_env).unwrap();
        let api = settings.build_api().unwrap();
        assert_eq!(api.base_endpoint(), "http://localhost:9000/v2/beers");
    }
}
