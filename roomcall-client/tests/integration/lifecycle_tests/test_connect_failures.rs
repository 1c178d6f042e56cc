use roomcall_client::{ClientError, ConnectionStatus};

use crate::integration::init_tracing;
use crate::utils::TestSession;

#[tokio::test]
async fn test_track_acquisition_failure_marks_failed() {
    init_tracing();
    let t = TestSession::new();
    t.sdk.fail_track_acquisition("Permission denied");

    let result = t.session.connect("alice", "demo").await;

    assert!(matches!(result, Err(ClientError::MediaAcquisition(ref e)) if e.0 == "Permission denied"));
    assert_eq!(t.session.status(), ConnectionStatus::Failed);
    assert_eq!(
        t.view.statuses(),
        vec![ConnectionStatus::Connecting, ConnectionStatus::Failed]
    );
    assert_eq!(t.tokens.calls(), 0);
    assert_eq!(t.sdk.connect_calls(), 0);
    assert_eq!(t.session.active_connection(), None);
}

#[tokio::test]
async fn test_token_rejection_marks_failed() {
    init_tracing();
    let t = TestSession::new();
    t.tokens.reject_with(400, "Missing identity or roomName");

    let result = t.session.connect("alice", "demo").await;

    assert!(matches!(
        result,
        Err(ClientError::TokenRejected { status: 400, ref message }) if message == "Missing identity or roomName"
    ));
    assert_eq!(t.session.status(), ConnectionStatus::Failed);
    assert_eq!(t.sdk.connect_calls(), 0);
}

#[tokio::test]
async fn test_room_connect_failure_marks_failed() {
    init_tracing();
    let t = TestSession::new();
    t.sdk.fail_connect("Access token is invalid");

    let result = t.session.connect("alice", "demo").await;

    assert!(matches!(result, Err(ClientError::Connect(_))));
    assert_eq!(t.session.status(), ConnectionStatus::Failed);
    assert!(!t.session.is_connected());
    assert!(t.session.participants().is_empty());
}

#[tokio::test]
async fn test_failed_attempt_keeps_tracks_until_leave() {
    init_tracing();
    let t = TestSession::new();
    t.sdk.fail_connect("Room not found");

    let _ = t.session.connect("alice", "demo").await;

    let tracks = t.sdk.created_tracks();
    assert_eq!(t.session.local_tracks().len(), 2);
    assert!(tracks.iter().all(|track| !track.is_stopped()));

    t.session.leave();

    assert!(tracks.iter().all(|track| track.is_stopped()));
    assert!(t.session.local_tracks().is_empty());
}

#[tokio::test]
async fn test_retry_after_failure_releases_previous_tracks() {
    init_tracing();
    let t = TestSession::new();
    t.tokens.reject_with(500, "Failed to generate token");
    let _ = t.session.connect("alice", "demo").await;
    let first = t.sdk.created_tracks();

    // a second attempt from Failed is allowed and starts from fresh tracks
    let result = t.session.connect("alice", "demo").await;

    assert!(result.is_err());
    assert_eq!(t.sdk.create_calls(), 2);
    assert!(first.iter().all(|track| track.is_stopped()));
    let second: Vec<_> = t.sdk.created_tracks().into_iter().skip(first.len()).collect();
    assert!(second.iter().all(|track| !track.is_stopped()));
}
