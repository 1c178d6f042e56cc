use roomcall_client::{
    ClientError, ConnectOutcome, ConnectionStatus, InputField, MISSING_INPUT_PROMPT,
};

use crate::integration::init_tracing;
use crate::utils::{TestSession, ViewCall};

#[tokio::test]
async fn test_second_connect_while_connected_is_noop() {
    init_tracing();
    let t = TestSession::new();
    t.session.connect("alice", "demo").await.unwrap();
    t.view.reset();

    let outcome = t.session.connect("alice", "other").await.unwrap();

    assert_eq!(outcome, ConnectOutcome::AlreadyActive);
    assert_eq!(t.sdk.create_calls(), 1);
    assert_eq!(t.tokens.calls(), 1);
    assert_eq!(t.sdk.connect_calls(), 1);
    assert!(t.view.calls().is_empty());
    assert_eq!(t.session.room_name().map(|r| r.to_string()).as_deref(), Some("demo"));
}

#[tokio::test]
async fn test_connect_while_connecting_is_noop() {
    init_tracing();
    let t = TestSession::new();
    let gate = t.sdk.hold_connect();

    let first = t.session.connect("alice", "demo");
    let second = async {
        while t.sdk.connect_calls() == 0 {
            tokio::task::yield_now().await;
        }
        let outcome = t.session.connect("alice", "demo").await;
        gate.notify_one();
        outcome
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.unwrap(), ConnectOutcome::Connected);
    assert_eq!(second.unwrap(), ConnectOutcome::AlreadyActive);
    assert_eq!(t.sdk.create_calls(), 1);
    assert_eq!(t.tokens.calls(), 1);
}

#[tokio::test]
async fn test_missing_name_prompts_without_state_change() {
    init_tracing();
    let t = TestSession::new();

    let result = t.session.connect("", "demo").await;

    assert!(matches!(
        result,
        Err(ClientError::MissingInput(InputField::DisplayName))
    ));
    assert_eq!(t.session.status(), ConnectionStatus::Disconnected);
    assert_eq!(
        t.view.calls(),
        vec![ViewCall::Prompt(MISSING_INPUT_PROMPT.to_string())]
    );
    assert_eq!(t.sdk.create_calls(), 0);
    assert_eq!(t.tokens.calls(), 0);
}

#[tokio::test]
async fn test_blank_room_prompts_without_state_change() {
    init_tracing();
    let t = TestSession::new();

    let result = t.session.connect("alice", "   ").await;

    assert!(matches!(
        result,
        Err(ClientError::MissingInput(InputField::RoomName))
    ));
    assert_eq!(t.session.status(), ConnectionStatus::Disconnected);
    assert_eq!(t.sdk.create_calls(), 0);
}
