use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::CallSession;
use crate::token_client::HttpTokenProvider;
use roomcall_core::MediaKind;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use super::dom_view::DomView;
use super::logger::Logger;
use super::twilio::TwilioSdk;

/// The call client as exposed to the host page.
#[wasm_bindgen]
pub struct CallApp {
    session: CallSession<TwilioSdk>,
}

#[wasm_bindgen]
impl CallApp {
    /// `config` is an optional `{ tokenUrl, localContainerId, remoteContainerId,
    /// statusId, notificationId }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CallApp, JsValue> {
        let config: ClientConfig = if config.is_undefined() || config.is_null() {
            ClientConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let view = DomView::new(&config)?;
        let tokens = HttpTokenProvider::new(config.token_url.clone());
        let (session, events) =
            CallSession::new(Rc::new(TwilioSdk), Rc::new(tokens), Rc::new(view));

        let driver = session.clone();
        spawn_local(async move {
            driver.run_event_loop(events).await;
        });

        Logger::info(&format!("Call client ready, tokens from {}", config.token_url));
        Ok(CallApp { session })
    }

    /// Resolves with the status label once the attempt settles. Failures are
    /// logged and reflected in the status, never rejected.
    pub fn connect(&self, display_name: String, room_name: String) -> js_sys::Promise {
        let session = self.session.clone();
        future_to_promise(async move {
            match session.connect(&display_name, &room_name).await {
                Ok(outcome) => Logger::info(&format!("Connect: {}", outcome.as_str())),
                Err(ClientError::MissingInput(field)) => {
                    Logger::warn(&format!("Connect blocked: missing {}", field))
                }
                Err(e) => Logger::error(&JsValue::from_str(&e.to_string())),
            }
            Ok(JsValue::from_str(session.status().label()))
        })
    }

    pub fn leave(&self) {
        self.session.leave();
    }

    /// Returns whether audio is now enabled.
    #[wasm_bindgen(js_name = toggleAudio)]
    pub fn toggle_audio(&self) -> bool {
        self.session.toggle_media(MediaKind::Audio)
    }

    /// Returns whether video is now enabled.
    #[wasm_bindgen(js_name = toggleVideo)]
    pub fn toggle_video(&self) -> bool {
        self.session.toggle_media(MediaKind::Video)
    }

    pub fn status(&self) -> String {
        self.session.status().label().to_string()
    }

    #[wasm_bindgen(js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        self.session.is_connected()
    }

    pub fn participants(&self) -> js_sys::Array {
        self.session
            .participants()
            .iter()
            .map(|identity| JsValue::from_str(identity.as_str()))
            .collect()
    }
}
