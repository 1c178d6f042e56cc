use serde::{Deserialize, Serialize};

/// Body of `POST /generate-token`.
///
/// Both fields default to empty so an absent field deserializes cleanly and is
/// rejected by presence validation instead of by the JSON layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub room_name: String,
}

impl TokenRequest {
    pub fn new(identity: impl Into<String>, room_name: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            room_name: room_name.into(),
        }
    }

    /// True when both fields carry something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.identity.trim().is_empty() && !self.room_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
