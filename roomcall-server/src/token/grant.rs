use serde::{Deserialize, Serialize};

/// Permission to join video rooms, optionally pinned to one room.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl VideoGrant {
    pub fn for_room(room: impl Into<String>) -> Self {
        Self {
            room: Some(room.into()),
        }
    }
}

/// The `grants` claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grants {
    pub identity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoGrant>,
}
