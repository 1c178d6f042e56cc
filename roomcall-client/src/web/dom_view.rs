use crate::config::ClientConfig;
use crate::events::RemoteParticipant;
use crate::view::{NOTIFICATION_TIMEOUT, Notification, NotificationSlot, SessionView};
use roomcall_core::{ConnectionStatus, Identity, MediaKind};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::logger::Logger;
use super::twilio::JsTrack;
use crate::sdk::MediaTrack;

const PARTICIPANT_CLASS: &str = "relative w-full h-64 bg-black rounded-xl overflow-hidden shadow-lg";

/// Renders the session into the host page.
///
/// Participant tiles are tracked in a map keyed by identity; the DOM is never
/// searched by id.
pub struct DomView {
    window: web_sys::Window,
    document: Document,
    local: Element,
    remote: Element,
    status: Element,
    notification: HtmlElement,
    tiles: RefCell<HashMap<Identity, Element>>,
    notification_slot: Rc<NotificationSlot>,
}

impl DomView {
    pub fn new(config: &ClientConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
        };

        let local = find(config.local_container_id.as_str())?;
        let remote = find(config.remote_container_id.as_str())?;
        let status = find(config.status_id.as_str())?;
        let notification = find(config.notification_id.as_str())?.dyn_into::<HtmlElement>()?;

        Ok(Self {
            window,
            document,
            local,
            remote,
            status,
            notification,
            tiles: RefCell::new(HashMap::new()),
            notification_slot: Rc::new(NotificationSlot::new()),
        })
    }

    fn create_tile(&self, identity: &Identity) -> Result<Element, JsValue> {
        let tile = self.document.create_element("div")?;
        tile.set_class_name(PARTICIPANT_CLASS);
        tile.set_attribute("data-identity", identity.as_str())?;
        Ok(tile)
    }

    fn hide_notification(notification: &HtmlElement) {
        notification.set_text_content(None);
        let _ = notification.style().set_property("display", "none");
    }
}

fn attach_track(parent: &Element, track: &JsTrack) {
    let element = track.attach();
    let style = element.style();
    let _ = style.set_property("width", "100%");
    let _ = style.set_property("height", "100%");
    let _ = style.set_property("object-fit", "cover");

    if let Err(e) = parent.append_child(&element) {
        Logger::error(&e);
    }
}

impl SessionView<JsTrack> for DomView {
    fn on_status(&self, status: ConnectionStatus) {
        self.status.set_text_content(Some(status.label()));
    }

    fn on_prompt(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            Logger::error(&e);
        }
    }

    fn on_local_tracks(&self, tracks: &[JsTrack]) {
        self.local.set_inner_html("");
        for track in tracks.iter().filter(|t| t.kind() == MediaKind::Video) {
            attach_track(&self.local, track);
        }
    }

    fn on_participant_joined(&self, participant: &RemoteParticipant<JsTrack>) {
        let tile = match self.create_tile(&participant.identity) {
            Ok(tile) => tile,
            Err(e) => {
                Logger::error(&e);
                return;
            }
        };

        for track in &participant.tracks {
            attach_track(&tile, track);
        }

        if let Err(e) = self.remote.append_child(&tile) {
            Logger::error(&e);
            return;
        }

        if let Some(stale) = self
            .tiles
            .borrow_mut()
            .insert(participant.identity.clone(), tile)
        {
            stale.remove();
        }
    }

    fn on_participant_left(&self, identity: &Identity) {
        if let Some(tile) = self.tiles.borrow_mut().remove(identity) {
            tile.remove();
        }
    }

    fn on_track_added(&self, identity: &Identity, track: &JsTrack) {
        if let Some(tile) = self.tiles.borrow().get(identity) {
            attach_track(tile, track);
        }
    }

    fn on_notification(&self, notification: &Notification) {
        let seq = self.notification_slot.show();

        self.notification
            .set_text_content(Some(&notification.to_string()));
        let _ = self.notification.style().set_property("display", "block");

        let slot = self.notification_slot.clone();
        let element = self.notification.clone();
        let clear = Closure::once_into_js(move || {
            if slot.expire(seq) {
                Self::hide_notification(&element);
            }
        });

        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                clear.unchecked_ref(),
                NOTIFICATION_TIMEOUT.as_millis() as i32,
            )
        {
            Logger::error(&e);
        }
    }

    fn on_cleared(&self) {
        self.local.set_inner_html("");
        self.remote.set_inner_html("");
        self.tiles.borrow_mut().clear();
    }
}
