use crate::events::{ConnectionId, RoomEventSender, RoomEventStream, event_channel};
use crate::sdk::{MediaTrack, VideoSdk};
use crate::token_client::TokenProvider;
use crate::view::SessionView;
use roomcall_core::{ConnectionStatus, Identity, MediaKind, MediaSelection, RoomName};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::debug;

mod connect_impl;
mod handle_event_impl;
mod leave_impl;
mod media_impl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected,
    /// A connection was already established or in progress; nothing was done.
    AlreadyActive,
    /// `leave` ran while the attempt was in flight; whatever it acquired was
    /// released.
    Cancelled,
}

impl ConnectOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectOutcome::Connected => "connected",
            ConnectOutcome::AlreadyActive => "already-active",
            ConnectOutcome::Cancelled => "cancelled",
        }
    }
}

struct SessionInner<S: VideoSdk> {
    status: ConnectionStatus,
    display_name: Option<Identity>,
    room_name: Option<RoomName>,
    media: MediaSelection,
    local_tracks: Vec<S::Track>,
    room: Option<S::Room>,
    participants: BTreeSet<Identity>,
    /// Attempt or connection currently owning the session.
    active: Option<ConnectionId>,
    next_connection: u64,
}

impl<S: VideoSdk> SessionInner<S> {
    fn new() -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            display_name: None,
            room_name: None,
            media: MediaSelection::default(),
            local_tracks: Vec::new(),
            room: None,
            participants: BTreeSet::new(),
            active: None,
            next_connection: 0,
        }
    }

    fn begin_attempt(&mut self) -> ConnectionId {
        self.next_connection += 1;
        let id = ConnectionId::new(self.next_connection);
        self.active = Some(id);
        self.status = ConnectionStatus::Connecting;
        id
    }
}

/// One user's call session.
///
/// Cheap to clone: clones share state, so a clone can be moved into SDK
/// callbacks or UI handlers. All methods borrow the shared state only between
/// awaits.
pub struct CallSession<S: VideoSdk> {
    inner: Rc<RefCell<SessionInner<S>>>,
    sdk: Rc<S>,
    tokens: Rc<dyn TokenProvider>,
    view: Rc<dyn SessionView<S::Track>>,
    events_tx: RoomEventSender<S::Track>,
}

impl<S: VideoSdk> Clone for CallSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            sdk: self.sdk.clone(),
            tokens: self.tokens.clone(),
            view: self.view.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

impl<S: VideoSdk> CallSession<S> {
    /// Returns the session and the stream its SDK events arrive on. Feed the
    /// stream to [`CallSession::run_event_loop`] (or to
    /// [`CallSession::handle_event`] one envelope at a time).
    pub fn new(
        sdk: Rc<S>,
        tokens: Rc<dyn TokenProvider>,
        view: Rc<dyn SessionView<S::Track>>,
    ) -> (Self, RoomEventStream<S::Track>) {
        let (events_tx, events_rx) = event_channel();
        let session = Self {
            inner: Rc::new(RefCell::new(SessionInner::new())),
            sdk,
            tokens,
            view,
            events_tx,
        };
        (session, events_rx)
    }

    pub fn status(&self) -> ConnectionStatus {
        self.inner.borrow().status
    }

    pub fn is_connected(&self) -> bool {
        self.status() == ConnectionStatus::Connected
    }

    pub fn display_name(&self) -> Option<Identity> {
        self.inner.borrow().display_name.clone()
    }

    pub fn room_name(&self) -> Option<RoomName> {
        self.inner.borrow().room_name.clone()
    }

    pub fn media(&self) -> MediaSelection {
        self.inner.borrow().media
    }

    /// Identities currently rendered, sorted.
    pub fn participants(&self) -> Vec<Identity> {
        self.inner.borrow().participants.iter().cloned().collect()
    }

    pub fn local_tracks(&self) -> Vec<S::Track> {
        self.inner.borrow().local_tracks.clone()
    }

    pub fn active_connection(&self) -> Option<ConnectionId> {
        self.inner.borrow().active
    }

    fn is_current(&self, connection: ConnectionId) -> bool {
        self.inner.borrow().active == Some(connection)
    }

    fn set_status(&self, status: ConnectionStatus) {
        self.inner.borrow_mut().status = status;
        debug!("Session status: {}", status);
        self.view.on_status(status);
    }
}

fn release_tracks<T: MediaTrack>(tracks: &[T]) {
    for track in tracks {
        track.stop();
    }
}

/// Brings each audio/video track in line with `media`.
fn apply_selection<T: MediaTrack>(tracks: &[T], media: MediaSelection) {
    for track in tracks {
        let kind = track.kind();
        if kind == MediaKind::Data {
            continue;
        }
        let wanted = media.is_enabled(kind);
        if track.is_enabled() != wanted {
            track.set_enabled(wanted);
        }
    }
}
