use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    DisplayName,
    RoomName,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::DisplayName => f.write_str("display name"),
            InputField::RoomName => f.write_str("room name"),
        }
    }
}

/// Failure reported by the video SDK. The SDK is opaque, so only its message
/// survives.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SdkError(pub String);

impl SdkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("missing {0}")]
    MissingInput(InputField),

    #[error("failed to acquire local media: {0}")]
    MediaAcquisition(#[source] SdkError),

    #[error("token request failed: {0}")]
    TokenTransport(#[from] reqwest::Error),

    #[error("token service answered {status}: {message}")]
    TokenRejected { status: u16, message: String },

    #[error("token service returned an empty token")]
    EmptyToken,

    #[error("failed to join room: {0}")]
    Connect(#[source] SdkError),
}
