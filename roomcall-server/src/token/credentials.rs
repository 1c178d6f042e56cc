use std::fmt;

/// The account/key/secret triple tokens are signed with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_sid: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(
        account_sid: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Name of the first blank member, if any.
    pub fn first_missing(&self) -> Option<&'static str> {
        if self.account_sid.is_empty() {
            Some("account sid")
        } else if self.api_key.is_empty() {
            Some("api key")
        } else if self.api_secret.is_empty() {
            Some("api secret")
        } else {
            None
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
