use crate::token::{Credentials, Grants, TokenError, VideoGrant};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

/// `cty` header value the video service expects on access tokens.
pub const TOKEN_CONTENT_TYPE: &str = "twilio-fpa;v=1";

pub const DEFAULT_TTL_SECS: u64 = 3600;

/// The service refuses tokens that live longer than a day.
pub const MAX_TTL_SECS: u64 = 86_400;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub jti: String,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub grants: Grants,
}

/// A single access token under construction.
pub struct AccessToken<'a> {
    credentials: &'a Credentials,
    identity: String,
    ttl_secs: u64,
    video: Option<VideoGrant>,
}

impl<'a> AccessToken<'a> {
    pub fn new(credentials: &'a Credentials, identity: impl Into<String>) -> Self {
        Self {
            credentials,
            identity: identity.into(),
            ttl_secs: DEFAULT_TTL_SECS,
            video: None,
        }
    }

    pub fn with_ttl(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    pub fn add_grant(&mut self, grant: VideoGrant) {
        self.video = Some(grant);
    }

    pub fn claims_at(&self, now: DateTime<Utc>) -> AccessTokenClaims {
        let iat = now.timestamp();
        let exp = now + Duration::seconds(self.ttl_secs as i64);

        AccessTokenClaims {
            jti: format!("{}-{}", self.credentials.api_key, iat),
            iss: self.credentials.api_key.clone(),
            sub: self.credentials.account_sid.clone(),
            iat,
            exp: exp.timestamp(),
            grants: Grants {
                identity: self.identity.clone(),
                video: self.video.clone(),
            },
        }
    }

    pub fn to_jwt(&self) -> Result<String, TokenError> {
        self.to_jwt_at(Utc::now())
    }

    pub fn to_jwt_at(&self, now: DateTime<Utc>) -> Result<String, TokenError> {
        if let Some(missing) = self.credentials.first_missing() {
            return Err(TokenError::MissingCredential(missing));
        }

        let mut header = Header::new(Algorithm::HS256);
        header.cty = Some(TOKEN_CONTENT_TYPE.to_string());

        let key = EncodingKey::from_secret(self.credentials.api_secret.as_bytes());
        let token = encode(&header, &self.claims_at(now), &key)?;
        Ok(token)
    }
}
