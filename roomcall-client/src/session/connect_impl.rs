use crate::error::{ClientError, InputField};
use crate::events::{ConnectionId, EventSink};
use crate::sdk::{RoomConnection, VideoSdk};
use crate::session::{CallSession, ConnectOutcome, apply_selection, release_tracks};
use crate::view::MISSING_INPUT_PROMPT;
use roomcall_core::{ConnectionStatus, Identity, MediaSelection, RoomName, TokenRequest};
use tracing::{debug, info, warn};

impl<S: VideoSdk> CallSession<S> {
    /// Acquire local tracks, fetch a token and join `room_name` as
    /// `display_name`, in that order.
    ///
    /// Does nothing while a connection is established or being established.
    /// Any failure leaves the session in `Failed`; tracks acquired by the
    /// attempt stay in the session until the next `leave` or `connect`.
    pub async fn connect(
        &self,
        display_name: &str,
        room_name: &str,
    ) -> Result<ConnectOutcome, ClientError> {
        let status = self.status();
        if status.is_active() {
            debug!("Connect ignored, session is {}", status);
            return Ok(ConnectOutcome::AlreadyActive);
        }

        let identity = Identity::parse(display_name);
        let room = RoomName::parse(room_name);
        let (identity, room) = match (identity, room) {
            (Some(identity), Some(room)) => (identity, room),
            (identity, _) => {
                self.view.on_prompt(MISSING_INPUT_PROMPT);
                let field = if identity.is_none() {
                    InputField::DisplayName
                } else {
                    InputField::RoomName
                };
                return Err(ClientError::MissingInput(field));
            }
        };

        let (connection, leftover, media) = {
            let mut inner = self.inner.borrow_mut();
            let connection = inner.begin_attempt();
            inner.display_name = Some(identity.clone());
            inner.room_name = Some(room.clone());
            (connection, std::mem::take(&mut inner.local_tracks), inner.media)
        };
        release_tracks(&leftover);
        self.view.on_status(ConnectionStatus::Connecting);
        info!("Connecting {} to room '{}' ({})", identity, room, connection);

        match self.establish(connection, &identity, &room, media).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!("Connection attempt {} failed: {}", connection, e);
                if self.is_current(connection) {
                    self.inner.borrow_mut().active = None;
                    self.set_status(ConnectionStatus::Failed);
                }
                Err(e)
            }
        }
    }

    async fn establish(
        &self,
        connection: ConnectionId,
        identity: &Identity,
        room: &RoomName,
        media: MediaSelection,
    ) -> Result<ConnectOutcome, ClientError> {
        let tracks = self.sdk.create_local_tracks(media.into()).await;
        if !self.is_current(connection) {
            if let Ok(tracks) = &tracks {
                release_tracks(tracks);
            }
            return Ok(ConnectOutcome::Cancelled);
        }
        let tracks = tracks.map_err(ClientError::MediaAcquisition)?;
        // the preference may have been toggled while capture was pending
        let media = {
            let mut inner = self.inner.borrow_mut();
            inner.local_tracks = tracks.clone();
            inner.media
        };
        apply_selection(&tracks, media);

        let request = TokenRequest::new(identity.as_str(), room.as_str());
        let token = self.tokens.fetch_token(&request).await;
        // leave() already stopped the tracks stored above
        if !self.is_current(connection) {
            return Ok(ConnectOutcome::Cancelled);
        }
        let token = token?;

        let sink = EventSink::new(connection, self.events_tx.clone());
        let joined = self.sdk.connect(&token, room, &tracks, sink).await;
        if !self.is_current(connection) {
            if let Ok(joined) = &joined {
                joined.disconnect();
            }
            return Ok(ConnectOutcome::Cancelled);
        }
        let joined = joined.map_err(ClientError::Connect)?;

        let existing = joined.participants();
        {
            let mut inner = self.inner.borrow_mut();
            inner.room = Some(joined);
            inner.participants = existing.iter().map(|p| p.identity.clone()).collect();
        }
        self.set_status(ConnectionStatus::Connected);
        self.view.on_local_tracks(&tracks);
        for participant in &existing {
            self.view.on_participant_joined(participant);
        }

        info!(
            "Joined room '{}' as {} with {} participant(s) present",
            room,
            identity,
            existing.len()
        );
        Ok(ConnectOutcome::Connected)
    }
}
