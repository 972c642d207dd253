//! Issued token pairs and validity results.

/// Refresh and access token minted by one `create_pair` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Long-lived token used to obtain new access tokens
    pub refresh_token: String,
    /// Short-lived token authorizing API use
    pub access_token: String,
}

impl From<TokenPair> for (String, String) {
    fn from(pair: TokenPair) -> Self {
        (pair.refresh_token, pair.access_token)
    }
}

/// Outcome of verifying a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// Malformed, signed with another key, or claims unparsable
    Invalid,
    /// Authentic, but past its expiry
    Expired,
    /// Authentic and unexpired
    Valid,
}

impl TokenStatus {
    pub fn is_well_formed(self) -> bool {
        !matches!(self, TokenStatus::Invalid)
    }

    pub fn is_unexpired(self) -> bool {
        matches!(self, TokenStatus::Valid)
    }
}

/// Two-flag validity report.
///
/// `unexpired` is only ever true when `well_formed` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    /// Signature verifies and the claims parse
    pub well_formed: bool,
    /// Additionally, the token has not expired
    pub unexpired: bool,
}

impl Validity {
    /// Both flags set.
    pub fn is_valid(&self) -> bool {
        self.well_formed && self.unexpired
    }
}

impl From<TokenStatus> for Validity {
    fn from(status: TokenStatus) -> Self {
        Self {
            well_formed: status.is_well_formed(),
            unexpired: status.is_unexpired(),
        }
    }
}

impl From<Validity> for (bool, bool) {
    fn from(validity: Validity) -> Self {
        (validity.well_formed, validity.unexpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_to_validity() {
        assert_eq!(<(bool, bool)>::from(Validity::from(TokenStatus::Invalid)), (false, false));
        assert_eq!(<(bool, bool)>::from(Validity::from(TokenStatus::Expired)), (true, false));
        assert_eq!(<(bool, bool)>::from(Validity::from(TokenStatus::Valid)), (true, true));
    }

    #[test]
    fn test_pair_destructures_refresh_first() {
        let pair = TokenPair {
            refresh_token: "r".to_string(),
            access_token: "a".to_string(),
        };
        let (refresh, access): (String, String) = pair.into();

        assert_eq!(refresh, "r");
        assert_eq!(access, "a");
    }
}
