//! JWT encoding and verification with HMAC-SHA256.

use hmac::{Hmac, Mac};
use jwt::header::HeaderType;
use jwt::{AlgorithmType, Header, SignWithKey, Token, Verified, VerifyWithKey};
use sha2::Sha256;
use token_error::TokenError;

use crate::claims::TokenClaims;

type HmacSha256 = Hmac<Sha256>;

/// Result of checking a token against a key.
#[derive(Debug)]
pub(crate) enum Verification {
    /// Signature verified and claims decoded.
    Verified(TokenClaims),
    /// Ordinary invalidity: bad signature, bad encoding, or wrong claim shape.
    Rejected(String),
}

fn header() -> Header {
    Header {
        algorithm: AlgorithmType::Hs256,
        type_: Some(HeaderType::JsonWebToken),
        ..Default::default()
    }
}

/// Encode claims into a signed JWT.
pub(crate) fn encode_token(claims: &TokenClaims, secret: &[u8]) -> Result<String, TokenError> {
    let key = HmacSha256::new_from_slice(secret).map_err(|e| {
        tracing::debug!("Failed to create HMAC key: {}", e);
        TokenError::Signing(e.to_string())
    })?;

    let token = Token::new(header(), claims).sign_with_key(&key).map_err(|e| {
        tracing::debug!("Failed to encode JWT: {}", e);
        TokenError::Signing(e.to_string())
    })?;

    Ok(token.as_str().to_string())
}

/// Verify a JWT and decode its claims.
///
/// Returns `Err` only for faults that say nothing about the token's
/// authenticity: a header naming another algorithm, or key material the
/// primitive refuses.
pub(crate) fn verify_token(token: &str, secret: &[u8]) -> Result<Verification, TokenError> {
    let key = HmacSha256::new_from_slice(secret).map_err(|e| {
        tracing::debug!("Failed to create HMAC key: {}", e);
        TokenError::Parse(e.to_string())
    })?;

    let verified: Result<Token<Header, TokenClaims, Verified>, jwt::Error> =
        token.verify_with_key(&key);

    match verified {
        Ok(token) => Ok(Verification::Verified(token.claims().clone())),
        Err(e) if is_fault(&e) => {
            tracing::debug!("JWT could not be processed: {}", e);
            Err(TokenError::Parse(e.to_string()))
        }
        Err(e) => {
            tracing::debug!("JWT rejected: {}", e);
            Ok(Verification::Rejected(e.to_string()))
        }
    }
}

fn is_fault(err: &jwt::Error) -> bool {
    matches!(
        err,
        jwt::Error::AlgorithmMismatch(..) | jwt::Error::RustCryptoMacKeyLength(..)
    )
}
