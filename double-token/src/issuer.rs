//! Paired refresh/access token issuer.

use arc_swap::ArcSwap;
use token_error::TokenError;

use crate::claims::TokenClaims;
use crate::clock::{Clock, SystemClock};
use crate::codec::{self, Verification};
use crate::config::{IssuerConfig, TokenConfig};
use crate::token::{TokenPair, TokenStatus, Validity};

/// Issues and validates refresh/access token pairs.
///
/// The signing key and issuer are held as one record and replaced atomically
/// by [`configure`](Self::configure). Every other operation works from a single
/// snapshot of that record, so a concurrent reconfiguration is seen either
/// entirely or not at all.
pub struct DoubleTokenIssuer<C = SystemClock> {
    config: ArcSwap<IssuerConfig>,
    clock: C,
    refresh_ttl_secs: i64,
    access_ttl_secs: i64,
}

impl DoubleTokenIssuer<SystemClock> {
    /// Create an issuer with an empty key and issuer.
    pub fn new() -> Self {
        Self::from_config(&TokenConfig::default())
    }

    /// Create an issuer that is already configured.
    pub fn with_key(key: impl Into<Vec<u8>>, issuer: impl Into<String>) -> Self {
        let issuer_config = IssuerConfig::new(key, issuer);
        let defaults = TokenConfig::default();
        Self {
            config: ArcSwap::from_pointee(issuer_config),
            clock: SystemClock,
            refresh_ttl_secs: defaults.refresh_ttl_secs,
            access_ttl_secs: defaults.access_ttl_secs,
        }
    }

    /// Create an issuer from a loaded configuration.
    ///
    /// The configured lifetimes are used by
    /// [`create_default_pair`](Self::create_default_pair).
    pub fn from_config(config: &TokenConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(IssuerConfig::new(
                config.secret.as_bytes(),
                config.issuer.as_str(),
            )),
            clock: SystemClock,
            refresh_ttl_secs: config.refresh_ttl_secs,
            access_ttl_secs: config.access_ttl_secs,
        }
    }
}

impl Default for DoubleTokenIssuer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DoubleTokenIssuer<C> {
    /// Replace the clock.
    pub fn with_clock<K: Clock>(self, clock: K) -> DoubleTokenIssuer<K> {
        DoubleTokenIssuer {
            config: self.config,
            clock,
            refresh_ttl_secs: self.refresh_ttl_secs,
            access_ttl_secs: self.access_ttl_secs,
        }
    }

    /// Replace the signing key and issuer.
    ///
    /// Tokens signed with the previous key stop verifying immediately.
    pub fn configure(&self, key: impl Into<Vec<u8>>, issuer: impl Into<String>) {
        let config = IssuerConfig::new(key, issuer);
        tracing::debug!(issuer = %config.issuer(), "Signing configuration replaced");
        self.config.store(std::sync::Arc::new(config));
    }

    /// Issuer stamped into new tokens.
    pub fn issuer(&self) -> String {
        self.config.load().issuer().to_string()
    }

    /// Create a refresh token and an access token carrying the same `info`.
    ///
    /// Each token expires `ttl` seconds after one shared reading of the clock.
    /// Negative lifetimes produce tokens that are already expired; a zero
    /// lifetime expires once the clock passes the issuing second. Either both tokens are returned or neither is.
    pub fn create_pair(
        &self,
        info: &[u8],
        refresh_ttl_secs: i64,
        access_ttl_secs: i64,
    ) -> Result<TokenPair, TokenError> {
        let config = self.config.load();
        let now = self.clock.now();

        let refresh = TokenClaims::with_ttl(info, config.issuer(), now, refresh_ttl_secs);
        let access = TokenClaims::with_ttl(info, config.issuer(), now, access_ttl_secs);

        let refresh_token = codec::encode_token(&refresh, config.signing_key())?;
        let access_token = codec::encode_token(&access, config.signing_key())?;

        Ok(TokenPair {
            refresh_token,
            access_token,
        })
    }

    /// Create a pair using the lifetimes from the issuer's [`TokenConfig`].
    pub fn create_default_pair(&self, info: &[u8]) -> Result<TokenPair, TokenError> {
        self.create_pair(info, self.refresh_ttl_secs, self.access_ttl_secs)
    }

    /// Verify a token and classify it.
    pub fn status(&self, token: &str) -> Result<TokenStatus, TokenError> {
        let config = self.config.load();
        let status = match codec::verify_token(token, config.signing_key())? {
            Verification::Rejected(_) => TokenStatus::Invalid,
            Verification::Verified(claims) if claims.is_expired_at(self.clock.now()) => {
                TokenStatus::Expired
            }
            Verification::Verified(_) => TokenStatus::Valid,
        };
        Ok(status)
    }

    /// Report whether a token is authentic and whether it is still unexpired.
    ///
    /// A forged, tampered or malformed token is `Ok` with both flags false.
    /// `Err` is reserved for faults unrelated to validity, such as a header
    /// naming an algorithm other than HS256.
    pub fn check_validity(&self, token: &str) -> Result<Validity, TokenError> {
        self.status(token).map(Validity::from)
    }

    /// Verify a token and return its claims.
    ///
    /// Expiry is not checked.
    pub fn decode_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let config = self.config.load();
        match codec::verify_token(token, config.signing_key())? {
            Verification::Verified(claims) => Ok(claims),
            Verification::Rejected(reason) => Err(TokenError::Parse(reason)),
        }
    }

    /// Verify a token and return its `info` payload.
    ///
    /// Expiry is deliberately not checked: an authentic but expired token
    /// still decodes. Callers that need a live token must also call
    /// [`check_validity`](Self::check_validity).
    pub fn decode_payload(&self, token: &str) -> Result<Vec<u8>, TokenError> {
        self.decode_claims(token).map(|claims| claims.info)
    }
}
