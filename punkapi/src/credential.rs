//! API key handling.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Key used as the historical default when no key is configured.
pub const DEFAULT_KEY: &str = "v2";

/// Punk API key.
///
/// The service expects the key as both the username and the password of
/// HTTP Basic auth. The key is never printed by `Debug`.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Username/password pair sent with every request.
    pub fn basic_auth(&self) -> (&str, &str) {
        let key = self.0.expose_secret();
        (key, key)
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

impl From<&str> for Credential {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Credential {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_both_user_and_password() {
        let cred = Credential::from("abc123");
        assert_eq!(cred.basic_auth(), ("abc123", "abc123"));
    }

    #[test]
    fn debug_hides_key() {
        let cred = Credential::from("abc123");
        assert!(!format!("{:?}", cred).contains("abc123"));
    }
}
