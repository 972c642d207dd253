//! Token claims carried by both tokens of a pair.

use serde::{Deserialize, Serialize};

/// Claims signed into every refresh and access token.
///
/// Only `info`, `exp` and `iss` are ever written. Tokens minted elsewhere that
/// omit `exp` or `iss` still parse; the missing fields read as `0` and `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Caller payload, opaque to this crate
    #[serde(with = "base64_bytes")]
    pub info: Vec<u8>,
    /// Expiration time (Unix timestamp)
    #[serde(default)]
    pub exp: i64,
    /// Issuer
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iss: String,
}

impl TokenClaims {
    /// Create claims expiring at `exp`.
    pub fn new(info: impl Into<Vec<u8>>, issuer: impl Into<String>, exp: i64) -> Self {
        Self {
            info: info.into(),
            exp,
            iss: issuer.into(),
        }
    }

    /// Create claims expiring `ttl_secs` after `now`.
    ///
    /// TTLs are not validated; a negative TTL yields claims that are already
    /// expired.
    pub fn with_ttl(info: impl Into<Vec<u8>>, issuer: impl Into<String>, now: i64, ttl_secs: i64) -> Self {
        Self::new(info, issuer, now.saturating_add(ttl_secs))
    }

    /// Check if the claims have expired at the given Unix time.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }
}

/// `info` travels as a standard base64 string, the usual JSON form for bytes.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        // null is how an empty byte slice is written by some encoders
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD.decode(encoded).map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_with_ttl() {
        let claims = TokenClaims::with_ttl(b"user:42".to_vec(), "svc-a", 1_000, 60);

        assert_eq!(claims.info, b"user:42");
        assert_eq!(claims.iss, "svc-a");
        assert_eq!(claims.exp, 1_060);
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = TokenClaims::new(Vec::new(), "", 100);

        assert!(!claims.is_expired_at(99));
        assert!(!claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));
    }

    #[test]
    fn test_negative_ttl_is_already_expired() {
        let claims = TokenClaims::with_ttl(Vec::new(), "", 1_000, -5);
        assert!(claims.is_expired_at(1_000));
    }

    #[test]
    fn test_ttl_saturates() {
        let claims = TokenClaims::with_ttl(Vec::new(), "", i64::MAX - 1, 10);
        assert_eq!(claims.exp, i64::MAX);
    }

    #[test]
    fn test_wire_field_names() {
        let claims = TokenClaims::new(b"hi".to_vec(), "svc-a", 42);
        let value = serde_json::to_value(&claims).unwrap();

        assert_eq!(value, serde_json::json!({ "info": "aGk=", "exp": 42, "iss": "svc-a" }));
    }

    #[test]
    fn test_empty_issuer_is_omitted() {
        let claims = TokenClaims::new(b"hi".to_vec(), "", 42);
        let value = serde_json::to_value(&claims).unwrap();

        assert!(value.get("iss").is_none());
    }

    #[test]
    fn test_lenient_decoding() {
        let claims: TokenClaims = serde_json::from_str(r#"{"info":null}"#).unwrap();

        assert!(claims.info.is_empty());
        assert_eq!(claims.exp, 0);
        assert_eq!(claims.iss, "");
    }

    #[test]
    fn test_rejects_non_base64_info() {
        let result: Result<TokenClaims, _> = serde_json::from_str(r#"{"info":"%%%","exp":1}"#);
        assert!(result.is_err());
    }
}
