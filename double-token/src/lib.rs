//! Paired refresh/access token issuing and validation.
//!
//! A [`DoubleTokenIssuer`] signs two HS256 JWTs over the same opaque payload:
//! a long-lived refresh token and a short-lived access token. Validation
//! reports authenticity and expiry separately.
//!
//! ```
//! use double_token::DoubleTokenIssuer;
//!
//! let issuer = DoubleTokenIssuer::new();
//! issuer.configure(b"secret".to_vec(), "svc-a");
//!
//! let pair = issuer.create_pair(b"user:42", 3600, 60)?;
//! let validity = issuer.check_validity(&pair.access_token)?;
//! assert!(validity.well_formed && validity.unexpired);
//! assert_eq!(issuer.decode_payload(&pair.refresh_token)?, b"user:42");
//! # Ok::<(), double_token::TokenError>(())
//! ```

mod claims;
mod clock;
mod codec;
mod config;
mod issuer;
mod service;
mod token;

pub use claims::TokenClaims;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{IssuerConfig, TokenConfig, DEFAULT_ACCESS_TTL_SECS, DEFAULT_REFRESH_TTL_SECS};
pub use issuer::DoubleTokenIssuer;
pub use service::DoubleToken;
pub use token::{TokenPair, TokenStatus, Validity};
pub use token_error::{ErrorResponse, TokenError};
