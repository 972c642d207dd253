//! Service abstraction over the issuer.

use token_error::TokenError;

use crate::clock::Clock;
use crate::issuer::DoubleTokenIssuer;
use crate::token::{TokenPair, Validity};

/// Double token operations as seen by host services.
///
/// Lets handlers depend on the operations rather than on a concrete issuer,
/// so tests can substitute their own implementation.
pub trait DoubleToken: Send + Sync {
    /// Replace the signing key and issuer.
    fn configure(&self, key: &[u8], issuer: &str);

    /// Create a refresh token and an access token carrying the same `info`.
    fn create_pair(
        &self,
        info: &[u8],
        refresh_ttl_secs: i64,
        access_ttl_secs: i64,
    ) -> Result<TokenPair, TokenError>;

    /// Report whether a token is authentic and whether it is still unexpired.
    fn check_validity(&self, token: &str) -> Result<Validity, TokenError>;

    /// Verify a token and return its payload, without checking expiry.
    fn decode_payload(&self, token: &str) -> Result<Vec<u8>, TokenError>;
}

impl<C: Clock> DoubleToken for DoubleTokenIssuer<C> {
    fn configure(&self, key: &[u8], issuer: &str) {
        DoubleTokenIssuer::configure(self, key, issuer)
    }

    fn create_pair(
        &self,
        info: &[u8],
        refresh_ttl_secs: i64,
        access_ttl_secs: i64,
    ) -> Result<TokenPair, TokenError> {
        DoubleTokenIssuer::create_pair(self, info, refresh_ttl_secs, access_ttl_secs)
    }

    fn check_validity(&self, token: &str) -> Result<Validity, TokenError> {
        DoubleTokenIssuer::check_validity(self, token)
    }

    fn decode_payload(&self, token: &str) -> Result<Vec<u8>, TokenError> {
        DoubleTokenIssuer::decode_payload(self, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn issue_and_read(service: &dyn DoubleToken) -> Vec<u8> {
        service.configure(b"secret", "svc-a");
        let pair = service.create_pair(b"user:42", 3600, 60).unwrap();
        assert!(service.check_validity(&pair.access_token).unwrap().is_valid());
        service.decode_payload(&pair.refresh_token).unwrap()
    }

    #[test]
    fn test_trait_object() {
        let service: Arc<dyn DoubleToken> = Arc::new(DoubleTokenIssuer::new());
        assert_eq!(issue_and_read(service.as_ref()), b"user:42");
    }
}
