use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
    Data,
}

impl MediaKind {
    /// Maps the SDK's `kind` string. Unknown kinds are treated as data tracks.
    pub fn from_sdk(kind: &str) -> Self {
        match kind {
            "audio" => MediaKind::Audio,
            "video" => MediaKind::Video,
            _ => MediaKind::Data,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Data => "data",
        };
        f.write_str(s)
    }
}

/// Which media kinds the user wants to send. Both are on by default.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq)]
pub struct MediaSelection {
    pub audio: bool,
    pub video: bool,
}

impl Default for MediaSelection {
    fn default() -> Self {
        Self {
            audio: true,
            video: true,
        }
    }
}

impl MediaSelection {
    pub fn is_enabled(&self, kind: MediaKind) -> bool {
        match kind {
            MediaKind::Audio => self.audio,
            MediaKind::Video => self.video,
            MediaKind::Data => false,
        }
    }

    pub fn set(&mut self, kind: MediaKind, enabled: bool) {
        match kind {
            MediaKind::Audio => self.audio = enabled,
            MediaKind::Video => self.video = enabled,
            MediaKind::Data => {}
        }
    }
}
