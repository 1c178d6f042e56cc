use futures::channel::mpsc;
use roomcall_core::Identity;
use std::fmt;

/// Tags one connection attempt. Events carry the id of the attempt whose SDK
/// room produced them, so anything from an earlier room can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A room member as reported by the SDK, with the tracks already subscribed
/// when it was reported.
#[derive(Debug, Clone)]
pub struct RemoteParticipant<T> {
    pub identity: Identity,
    pub tracks: Vec<T>,
}

impl<T> RemoteParticipant<T> {
    pub fn new(identity: impl Into<Identity>, tracks: Vec<T>) -> Self {
        Self {
            identity: identity.into(),
            tracks,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RoomEvent<T> {
    ParticipantConnected(RemoteParticipant<T>),
    ParticipantDisconnected(Identity),
    TrackSubscribed { identity: Identity, track: T },
}

#[derive(Debug)]
pub struct RoomEventEnvelope<T> {
    pub connection: ConnectionId,
    pub event: RoomEvent<T>,
}

pub type RoomEventStream<T> = mpsc::UnboundedReceiver<RoomEventEnvelope<T>>;

pub(crate) type RoomEventSender<T> = mpsc::UnboundedSender<RoomEventEnvelope<T>>;

pub(crate) fn event_channel<T>() -> (RoomEventSender<T>, RoomEventStream<T>) {
    mpsc::unbounded()
}

/// Handed to the SDK adapter on connect; the adapter forwards SDK callbacks
/// through it.
pub struct EventSink<T> {
    connection: ConnectionId,
    tx: RoomEventSender<T>,
}

impl<T> Clone for EventSink<T> {
    fn clone(&self) -> Self {
        Self {
            connection: self.connection,
            tx: self.tx.clone(),
        }
    }
}

impl<T> EventSink<T> {
    pub(crate) fn new(connection: ConnectionId, tx: RoomEventSender<T>) -> Self {
        Self { connection, tx }
    }

    pub fn connection(&self) -> ConnectionId {
        self.connection
    }

    /// Returns false once the session is gone.
    pub fn emit(&self, event: RoomEvent<T>) -> bool {
        let envelope = RoomEventEnvelope {
            connection: self.connection,
            event,
        };
        self.tx.unbounded_send(envelope).is_ok()
    }

    pub fn participant_connected(&self, participant: RemoteParticipant<T>) -> bool {
        self.emit(RoomEvent::ParticipantConnected(participant))
    }

    pub fn participant_disconnected(&self, identity: impl Into<Identity>) -> bool {
        self.emit(RoomEvent::ParticipantDisconnected(identity.into()))
    }

    pub fn track_subscribed(&self, identity: impl Into<Identity>, track: T) -> bool {
        self.emit(RoomEvent::TrackSubscribed {
            identity: identity.into(),
            track,
        })
    }
}
