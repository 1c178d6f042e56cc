use crate::token::{AccessToken, Credentials, MAX_TTL_SECS, VideoGrant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("credential is empty: {0}")]
    MissingCredential(&'static str),

    #[error("token ttl must be between 1 and {MAX_TTL_SECS} seconds, got {0}")]
    InvalidTtl(u64),

    #[error("jwt signing failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Stateless token minting: one video grant per call, nothing retained.
#[derive(Debug)]
pub struct TokenIssuer {
    credentials: Credentials,
    ttl_secs: u64,
}

impl TokenIssuer {
    pub fn new(credentials: Credentials, ttl_secs: u64) -> Result<Self, TokenError> {
        if ttl_secs == 0 || ttl_secs > MAX_TTL_SECS {
            return Err(TokenError::InvalidTtl(ttl_secs));
        }

        Ok(Self {
            credentials,
            ttl_secs,
        })
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Signs a token letting `identity` join `room`.
    pub fn issue(&self, identity: &str, room: &str) -> Result<String, TokenError> {
        let mut token = AccessToken::new(&self.credentials, identity).with_ttl(self.ttl_secs);
        token.add_grant(VideoGrant::for_room(room));
        token.to_jwt()
    }
}
