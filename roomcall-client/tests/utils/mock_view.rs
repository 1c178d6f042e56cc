use roomcall_client::{
    ConnectionStatus, Identity, Notification, RemoteParticipant, SessionView,
};
use std::cell::RefCell;

use super::mock_sdk::MockTrack;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Status(ConnectionStatus),
    Prompt(String),
    LocalTracks(Vec<u32>),
    Joined(String, Vec<u32>),
    Left(String),
    TrackAdded(String, u32),
    Notification(String),
    Cleared,
}

/// View that records every call in order.
#[derive(Default)]
pub struct RecordingView {
    calls: RefCell<Vec<ViewCall>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.borrow().clone()
    }

    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn statuses(&self) -> Vec<ConnectionStatus> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ViewCall::Status(status) => Some(*status),
                _ => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ViewCall::Notification(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ViewCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl SessionView<MockTrack> for RecordingView {
    fn on_status(&self, status: ConnectionStatus) {
        self.record(ViewCall::Status(status));
    }

    fn on_prompt(&self, message: &str) {
        self.record(ViewCall::Prompt(message.to_string()));
    }

    fn on_local_tracks(&self, tracks: &[MockTrack]) {
        self.record(ViewCall::LocalTracks(tracks.iter().map(|t| t.id).collect()));
    }

    fn on_participant_joined(&self, participant: &RemoteParticipant<MockTrack>) {
        self.record(ViewCall::Joined(
            participant.identity.to_string(),
            participant.tracks.iter().map(|t| t.id).collect(),
        ));
    }

    fn on_participant_left(&self, identity: &Identity) {
        self.record(ViewCall::Left(identity.to_string()));
    }

    fn on_track_added(&self, identity: &Identity, track: &MockTrack) {
        self.record(ViewCall::TrackAdded(identity.to_string(), track.id));
    }

    fn on_notification(&self, notification: &Notification) {
        self.record(ViewCall::Notification(notification.to_string()));
    }

    fn on_cleared(&self) {
        self.record(ViewCall::Cleared);
    }
}
