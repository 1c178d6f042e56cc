use roomcall_client::{CallSession, RoomEventStream, SessionView, TokenProvider};
use std::rc::Rc;

use super::mock_sdk::{MockSdk, MockTrack};
use super::mock_tokens::ScriptedTokenProvider;
use super::mock_view::RecordingView;

/// A session wired to mocks, with handles to each of them.
pub struct TestSession {
    pub session: CallSession<MockSdk>,
    pub events: RoomEventStream<MockTrack>,
    pub sdk: Rc<MockSdk>,
    pub tokens: Rc<ScriptedTokenProvider>,
    pub view: Rc<RecordingView>,
}

impl TestSession {
    pub fn new() -> Self {
        Self::with_tokens(Rc::new(ScriptedTokenProvider::new()))
    }

    pub fn with_tokens(tokens: Rc<ScriptedTokenProvider>) -> Self {
        let sdk = Rc::new(MockSdk::new());
        let view = Rc::new(RecordingView::new());

        let (session, events) = CallSession::new(
            sdk.clone(),
            tokens.clone() as Rc<dyn TokenProvider>,
            view.clone() as Rc<dyn SessionView<MockTrack>>,
        );

        Self {
            session,
            events,
            sdk,
            tokens,
            view,
        }
    }

    /// Applies every queued SDK event; returns how many changed something.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(Some(envelope)) = self.events.try_next() {
            if self.session.handle_event(envelope) {
                applied += 1;
            }
        }
        applied
    }
}
