use crate::error::SdkError;
use crate::events::{EventSink, RemoteParticipant};
use async_trait::async_trait;
use roomcall_core::{MediaKind, MediaSelection, RoomName};
use serde::Serialize;

/// Which local devices to capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalTrackOptions {
    pub audio: bool,
    pub video: bool,
}

impl LocalTrackOptions {
    pub fn is_empty(&self) -> bool {
        !self.audio && !self.video
    }
}

impl From<MediaSelection> for LocalTrackOptions {
    fn from(selection: MediaSelection) -> Self {
        Self {
            audio: selection.audio,
            video: selection.video,
        }
    }
}

/// A media track handle owned by the SDK.
///
/// Disabling keeps the track (and its device) but stops sending media;
/// stopping releases the device for good.
pub trait MediaTrack {
    fn kind(&self) -> MediaKind;

    fn is_enabled(&self) -> bool;

    fn enable(&self);

    fn disable(&self);

    fn stop(&self);

    fn set_enabled(&self, enabled: bool) {
        if enabled {
            self.enable();
        } else {
            self.disable();
        }
    }
}

/// A joined room.
pub trait RoomConnection {
    type Track;

    /// Members already present when the connection was established.
    fn participants(&self) -> Vec<RemoteParticipant<Self::Track>>;

    fn disconnect(&self);
}

/// The external video SDK, seen through the few calls the client needs.
///
/// `connect` receives an [`EventSink`] and must forward the room's
/// participant-connected, participant-disconnected and track-subscribed
/// callbacks through it for as long as the room exists.
#[async_trait(?Send)]
pub trait VideoSdk: 'static {
    type Track: MediaTrack + Clone + 'static;
    type Room: RoomConnection<Track = Self::Track> + 'static;

    async fn create_local_tracks(
        &self,
        options: LocalTrackOptions,
    ) -> Result<Vec<Self::Track>, SdkError>;

    async fn connect(
        &self,
        token: &str,
        room: &RoomName,
        tracks: &[Self::Track],
        events: EventSink<Self::Track>,
    ) -> Result<Self::Room, SdkError>;
}
