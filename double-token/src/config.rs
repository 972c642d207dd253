//! Issuer configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Default refresh token lifetime (7 days).
pub const DEFAULT_REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Default access token lifetime (15 minutes).
pub const DEFAULT_ACCESS_TTL_SECS: i64 = 15 * 60;

/// Token configuration as loaded by a host service.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token issuer
    pub issuer: String,
    /// Refresh token validity duration in seconds
    pub refresh_ttl_secs: i64,
    /// Access token validity duration in seconds
    pub access_ttl_secs: i64,
}

impl TokenConfig {
    /// Create a new token configuration with default lifetimes.
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            ..Self::default()
        }
    }

    /// Set the refresh token lifetime.
    pub fn with_refresh_ttl(mut self, secs: i64) -> Self {
        self.refresh_ttl_secs = secs;
        self
    }

    /// Set the access token lifetime.
    pub fn with_access_ttl(mut self, secs: i64) -> Self {
        self.access_ttl_secs = secs;
        self
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: String::new(),
            refresh_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
            access_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
        }
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("refresh_ttl_secs", &self.refresh_ttl_secs)
            .field("access_ttl_secs", &self.access_ttl_secs)
            .finish()
    }
}

/// Signing key and issuer, swapped as one record.
///
/// The key bytes are wiped when the last reference is dropped.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct IssuerConfig {
    signing_key: Vec<u8>,
    issuer: String,
}

impl IssuerConfig {
    /// Create a new issuer configuration.
    pub fn new(signing_key: impl Into<Vec<u8>>, issuer: impl Into<String>) -> Self {
        Self {
            signing_key: signing_key.into(),
            issuer: issuer.into(),
        }
    }

    /// Issuer stamped into new tokens.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub(crate) fn signing_key(&self) -> &[u8] {
        &self.signing_key
    }
}

impl fmt::Debug for IssuerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuerConfig")
            .field("signing_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TokenConfig::default();
        assert_eq!(config.refresh_ttl_secs, 604_800);
        assert_eq!(config.access_ttl_secs, 900);
        assert!(config.secret.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = TokenConfig::new("secret", "svc-a")
            .with_refresh_ttl(3600)
            .with_access_ttl(60);

        assert_eq!(config.issuer, "svc-a");
        assert_eq!(config.refresh_ttl_secs, 3600);
        assert_eq!(config.access_ttl_secs, 60);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: TokenConfig =
            serde_json::from_str(r#"{"secret":"s3cret","issuer":"svc-a"}"#).unwrap();

        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.access_ttl_secs, DEFAULT_ACCESS_TTL_SECS);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = TokenConfig::new("s3cret", "svc-a");
        let issuer = IssuerConfig::new(b"s3cret".to_vec(), "svc-a");

        assert!(!format!("{:?}", config).contains("s3cret"));
        assert!(!format!("{:?}", issuer).contains("s3cret"));
        assert!(format!("{:?}", issuer).contains("svc-a"));
    }
}
