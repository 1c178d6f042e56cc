use crate::events::{RoomEvent, RoomEventEnvelope, RoomEventStream};
use crate::sdk::VideoSdk;
use crate::session::CallSession;
use crate::view::Notification;
use futures::StreamExt;
use roomcall_core::ConnectionStatus;
use tracing::{debug, info};

impl<S: VideoSdk> CallSession<S> {
    /// Applies one SDK event to the session and the view. Returns whether
    /// anything changed.
    ///
    /// Events from a connection that is no longer active (the user left, or
    /// reconnected since) are dropped, as are duplicate joins and departures
    /// or tracks for identities that are not rendered.
    pub fn handle_event(&self, envelope: RoomEventEnvelope<S::Track>) -> bool {
        let RoomEventEnvelope { connection, event } = envelope;

        {
            let inner = self.inner.borrow();
            if inner.active != Some(connection) || inner.status != ConnectionStatus::Connected {
                debug!("Dropping event from inactive connection {}", connection);
                return false;
            }
        }

        match event {
            RoomEvent::ParticipantConnected(participant) => {
                let inserted = self
                    .inner
                    .borrow_mut()
                    .participants
                    .insert(participant.identity.clone());
                if !inserted {
                    debug!("{} is already rendered", participant.identity);
                    return false;
                }

                info!("Participant joined: {}", participant.identity);
                self.view
                    .on_notification(&Notification::joined(participant.identity.clone()));
                self.view.on_participant_joined(&participant);
                true
            }

            RoomEvent::ParticipantDisconnected(identity) => {
                let removed = self.inner.borrow_mut().participants.remove(&identity);
                if !removed {
                    debug!("Ignoring departure of unknown participant {}", identity);
                    return false;
                }

                info!("Participant left: {}", identity);
                self.view.on_participant_left(&identity);
                self.view.on_notification(&Notification::left(identity));
                true
            }

            RoomEvent::TrackSubscribed { identity, track } => {
                if !self.inner.borrow().participants.contains(&identity) {
                    debug!("Ignoring track for unknown participant {}", identity);
                    return false;
                }

                self.view.on_track_added(&identity, &track);
                true
            }
        }
    }

    /// Applies events until the stream ends.
    pub async fn run_event_loop(&self, mut events: RoomEventStream<S::Track>) {
        while let Some(envelope) = events.next().await {
            self.handle_event(envelope);
        }
        debug!("Room event stream closed");
    }
}
