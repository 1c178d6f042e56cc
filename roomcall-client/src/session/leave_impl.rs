use crate::sdk::{RoomConnection, VideoSdk};
use crate::session::{CallSession, release_tracks};
use roomcall_core::ConnectionStatus;
use tracing::info;

impl<S: VideoSdk> CallSession<S> {
    /// Tears the session down whatever state it is in: releases the room,
    /// stops every local track, clears the rendered views and returns to
    /// `Disconnected`. An attempt still in flight is cancelled.
    pub fn leave(&self) {
        let (room, tracks, previous) = {
            let mut inner = self.inner.borrow_mut();
            inner.active = None;
            inner.participants.clear();
            inner.display_name = None;
            inner.room_name = None;
            let previous = inner.status;
            inner.status = ConnectionStatus::Disconnected;
            (
                inner.room.take(),
                std::mem::take(&mut inner.local_tracks),
                previous,
            )
        };

        if let Some(room) = &room {
            room.disconnect();
        }
        release_tracks(&tracks);

        self.view.on_cleared();
        self.view.on_status(ConnectionStatus::Disconnected);

        info!(
            "Left session (was {}), stopped {} local track(s)",
            previous,
            tracks.len()
        );
    }
}
