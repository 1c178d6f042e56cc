use crate::events::RemoteParticipant;
use roomcall_core::{ConnectionStatus, Identity};
use std::cell::Cell;
use std::fmt;
use std::time::Duration;

/// How long a join/leave notice stays up.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

pub const MISSING_INPUT_PROMPT: &str = "Enter name and room";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Joined,
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub identity: Identity,
}

impl Notification {
    pub fn joined(identity: Identity) -> Self {
        Self {
            kind: NotificationKind::Joined,
            identity,
        }
    }

    pub fn left(identity: Identity) -> Self {
        Self {
            kind: NotificationKind::Left,
            identity,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NotificationKind::Joined => write!(f, "{} joined", self.identity),
            NotificationKind::Left => write!(f, "{} left", self.identity),
        }
    }
}

/// Which notification is on screen. Each shown notification gets a sequence
/// number; its expiry only clears the screen if nothing newer replaced it.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Cell<u64>,
    visible: Cell<bool>,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new notification as shown and returns its sequence number.
    pub fn show(&self) -> u64 {
        let seq = self.current.get() + 1;
        self.current.set(seq);
        self.visible.set(true);
        seq
    }

    /// Called when the timer for `seq` fires. Returns whether the caller
    /// should hide the notification.
    pub fn expire(&self, seq: u64) -> bool {
        if self.visible.get() && self.current.get() == seq {
            self.visible.set(false);
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

/// What the session asks of the UI. Implementations render; they never call
/// back into the session.
pub trait SessionView<T> {
    fn on_status(&self, status: ConnectionStatus);

    /// Blocking, user-facing prompt (missing input).
    fn on_prompt(&self, message: &str);

    fn on_local_tracks(&self, tracks: &[T]);

    fn on_participant_joined(&self, participant: &RemoteParticipant<T>);

    fn on_participant_left(&self, identity: &Identity);

    fn on_track_added(&self, identity: &Identity, track: &T);

    /// Transient; the view clears it after [`NOTIFICATION_TIMEOUT`] unless a
    /// newer one replaced it.
    fn on_notification(&self, notification: &Notification);

    /// Drop every rendered track and participant.
    fn on_cleared(&self);
}
