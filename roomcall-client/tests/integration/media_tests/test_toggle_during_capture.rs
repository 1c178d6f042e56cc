use roomcall_client::{ConnectOutcome, MediaKind, MediaTrack};

use crate::integration::init_tracing;
use crate::utils::TestSession;

#[tokio::test]
async fn test_video_toggled_off_while_capturing_joins_disabled() {
    init_tracing();
    let t = TestSession::new();
    let gate = t.sdk.hold_tracks();

    let attempt = t.session.connect("alice", "demo");
    let user = async {
        while t.sdk.create_calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(!t.session.toggle_media(MediaKind::Video));
        gate.notify_one();
    };
    let (outcome, ()) = tokio::join!(attempt, user);

    assert_eq!(outcome.unwrap(), ConnectOutcome::Connected);
    let tracks = t.session.local_tracks();
    let video = tracks
        .iter()
        .find(|track| track.kind() == MediaKind::Video)
        .unwrap();
    let audio = tracks
        .iter()
        .find(|track| track.kind() == MediaKind::Audio)
        .unwrap();
    assert!(!video.is_enabled());
    assert_eq!(video.disable_calls(), 1);
    assert!(audio.is_enabled());
    assert_eq!(audio.disable_calls(), 0);
}

#[tokio::test]
async fn test_toggle_back_on_while_capturing_leaves_tracks_live() {
    init_tracing();
    let t = TestSession::new();
    let gate = t.sdk.hold_tracks();

    let attempt = t.session.connect("alice", "demo");
    let user = async {
        while t.sdk.create_calls() == 0 {
            tokio::task::yield_now().await;
        }
        t.session.toggle_media(MediaKind::Audio);
        t.session.toggle_media(MediaKind::Audio);
        gate.notify_one();
    };
    let (outcome, ()) = tokio::join!(attempt, user);

    assert_eq!(outcome.unwrap(), ConnectOutcome::Connected);
    for track in t.session.local_tracks() {
        assert!(track.is_enabled());
        assert_eq!(track.disable_calls(), 0);
        assert_eq!(track.enable_calls(), 0);
    }
}
