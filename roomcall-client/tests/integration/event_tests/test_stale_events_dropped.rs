use roomcall_client::{MediaKind, RemoteParticipant};

use crate::integration::init_tracing;
use crate::utils::{MockTrack, TestSession};

#[tokio::test]
async fn test_disconnect_event_after_leave_is_dropped() {
    init_tracing();
    let mut t = TestSession::new();
    t.sdk
        .set_existing_participants(vec![RemoteParticipant::new("bob", vec![])]);
    t.session.connect("alice", "demo").await.unwrap();
    let sink = t.sdk.latest_sink();

    t.session.leave();
    t.view.reset();
    sink.participant_disconnected("bob");

    assert_eq!(t.pump(), 0);
    assert!(t.view.calls().is_empty());
}

#[tokio::test]
async fn test_events_from_previous_room_are_dropped() {
    init_tracing();
    let mut t = TestSession::new();
    t.session.connect("alice", "first").await.unwrap();
    let old = t.sdk.latest_sink();
    t.session.leave();
    t.session.connect("alice", "second").await.unwrap();
    let current = t.sdk.latest_sink();
    t.view.reset();

    assert_ne!(old.connection(), current.connection());
    old.participant_connected(RemoteParticipant::new("ghost", vec![]));
    old.track_subscribed("ghost", MockTrack::new(90, MediaKind::Video));
    current.participant_connected(RemoteParticipant::new("bob", vec![]));

    assert_eq!(t.pump(), 1);
    assert_eq!(t.view.notifications(), vec!["bob joined".to_string()]);
    assert_eq!(t.session.participants().len(), 1);
}

#[tokio::test]
async fn test_events_before_join_completes_are_dropped() {
    init_tracing();
    let mut t = TestSession::new();
    t.sdk.fail_connect("Room is full");
    let _ = t.session.connect("alice", "demo").await;

    t.sdk.sink(0).participant_connected(RemoteParticipant::new("bob", vec![]));

    assert_eq!(t.pump(), 0);
    assert!(t.view.notifications().is_empty());
}
