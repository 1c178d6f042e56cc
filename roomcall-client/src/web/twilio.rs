use crate::error::SdkError;
use crate::events::{EventSink, RemoteParticipant};
use crate::sdk::{LocalTrackOptions, MediaTrack, RoomConnection, VideoSdk};
use async_trait::async_trait;
use roomcall_core::{MediaKind, RoomName};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::logger::Logger;

// Twilio Video is loaded by the host page as the global `Twilio.Video`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["Twilio", "Video"], js_name = createLocalTracks, catch)]
    fn create_local_tracks_js(options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["Twilio", "Video"], js_name = connect, catch)]
    fn connect_js(token: &str, options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    /// Any SDK object that emits events (rooms, participants).
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    type Emitter;

    #[wasm_bindgen(method)]
    fn on(this: &Emitter, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = removeListener)]
    fn remove_listener(this: &Emitter, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    pub type JsTrack;

    #[wasm_bindgen(method, getter = kind)]
    fn kind_name(this: &JsTrack) -> String;

    #[wasm_bindgen(method, getter = isEnabled)]
    fn enabled_flag(this: &JsTrack) -> bool;

    #[wasm_bindgen(method, js_name = enable)]
    fn enable_js(this: &JsTrack);

    #[wasm_bindgen(method, js_name = disable)]
    fn disable_js(this: &JsTrack);

    #[wasm_bindgen(method, js_name = stop)]
    fn stop_js(this: &JsTrack);

    /// Creates a `<video>`/`<audio>` element playing the track.
    #[wasm_bindgen(method)]
    pub fn attach(this: &JsTrack) -> web_sys::HtmlElement;

    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    pub type JsRoom;

    #[wasm_bindgen(method, getter)]
    fn participants(this: &JsRoom) -> js_sys::Map;

    #[wasm_bindgen(method, js_name = disconnect)]
    fn disconnect_js(this: &JsRoom);

    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    type JsParticipant;

    #[wasm_bindgen(method, getter)]
    fn identity(this: &JsParticipant) -> String;

    #[wasm_bindgen(method, getter)]
    fn tracks(this: &JsParticipant) -> js_sys::Map;

    #[wasm_bindgen(extends = js_sys::Object)]
    type JsPublication;

    #[wasm_bindgen(method, getter = isSubscribed)]
    fn is_subscribed(this: &JsPublication) -> bool;

    #[wasm_bindgen(method, getter)]
    fn track(this: &JsPublication) -> Option<JsTrack>;
}

impl MediaTrack for JsTrack {
    fn kind(&self) -> MediaKind {
        MediaKind::from_sdk(&self.kind_name())
    }

    fn is_enabled(&self) -> bool {
        self.enabled_flag()
    }

    fn enable(&self) {
        self.enable_js();
    }

    fn disable(&self) {
        self.disable_js();
    }

    fn stop(&self) {
        self.stop_js();
    }
}

struct Listener {
    target: Emitter,
    event: &'static str,
    /// Identity of the participant the listener is attached to; `None` for
    /// room-level listeners.
    owner: Option<String>,
    callback: Closure<dyn FnMut(JsValue)>,
}

/// Listeners installed for one room. They stay alive until detached.
type SharedListeners = Rc<RefCell<Vec<Listener>>>;

fn listen(
    listeners: &SharedListeners,
    target: &Emitter,
    event: &'static str,
    owner: Option<String>,
    callback: Box<dyn FnMut(JsValue)>,
) {
    let callback = Closure::wrap(callback);
    target.on(event, callback.as_ref().unchecked_ref());
    listeners.borrow_mut().push(Listener {
        target: target.clone(),
        event,
        owner,
        callback,
    });
}

/// Unregisters and frees every listener matching `detach`.
fn detach_listeners(listeners: &SharedListeners, detach: impl Fn(&Listener) -> bool) {
    let detached: Vec<Listener> = {
        let mut all = listeners.borrow_mut();
        let (detached, kept): (Vec<Listener>, Vec<Listener>) =
            std::mem::take(&mut *all).into_iter().partition(|l| detach(l));
        *all = kept;
        detached
    };

    for listener in &detached {
        listener
            .target
            .remove_listener(listener.event, listener.callback.as_ref().unchecked_ref());
    }
}

/// A joined Twilio room plus the members it reported on join.
pub struct TwilioRoom {
    room: JsRoom,
    existing: Vec<RemoteParticipant<JsTrack>>,
    listeners: SharedListeners,
}

impl RoomConnection for TwilioRoom {
    type Track = JsTrack;

    fn participants(&self) -> Vec<RemoteParticipant<JsTrack>> {
        self.existing.clone()
    }

    fn disconnect(&self) {
        detach_listeners(&self.listeners, |_| true);
        self.room.disconnect_js();
    }
}

/// [`VideoSdk`] backed by the global Twilio Video SDK.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwilioSdk;

#[async_trait(?Send)]
impl VideoSdk for TwilioSdk {
    type Track = JsTrack;
    type Room = TwilioRoom;

    async fn create_local_tracks(
        &self,
        options: LocalTrackOptions,
    ) -> Result<Vec<JsTrack>, SdkError> {
        if options.is_empty() {
            return Ok(Vec::new());
        }

        let js_options =
            serde_wasm_bindgen::to_value(&options).map_err(|e| SdkError::new(e.to_string()))?;
        let promise = create_local_tracks_js(&js_options).map_err(js_error)?;
        let value = JsFuture::from(promise).await.map_err(js_error)?;

        let tracks = js_sys::Array::from(&value)
            .iter()
            .map(|track| track.unchecked_into::<JsTrack>())
            .collect();
        Ok(tracks)
    }

    async fn connect(
        &self,
        token: &str,
        room: &RoomName,
        tracks: &[JsTrack],
        events: EventSink<JsTrack>,
    ) -> Result<TwilioRoom, SdkError> {
        let track_list = js_sys::Array::new();
        for track in tracks {
            track_list.push(track);
        }

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"name".into(), &room.as_str().into()).map_err(js_error)?;
        js_sys::Reflect::set(&options, &"tracks".into(), &track_list).map_err(js_error)?;

        let promise = connect_js(token, &options).map_err(js_error)?;
        let joined: JsRoom = JsFuture::from(promise).await.map_err(js_error)?.unchecked_into();

        let listeners = SharedListeners::default();
        install_room_listeners(&joined, &events, &listeners);

        let mut existing = Vec::new();
        joined.participants().for_each(&mut |value, _key| {
            let participant: JsParticipant = value.unchecked_into();
            existing.push(watch_participant(&participant, &events, &listeners));
        });

        Ok(TwilioRoom {
            room: joined,
            existing,
            listeners,
        })
    }
}

fn install_room_listeners(
    room: &JsRoom,
    events: &EventSink<JsTrack>,
    listeners: &SharedListeners,
) {
    let target: &Emitter = room.unchecked_ref();

    let on_connected = {
        let events = events.clone();
        let listeners = listeners.clone();
        Box::new(move |value: JsValue| {
            let participant: JsParticipant = value.unchecked_into();
            let remote = watch_participant(&participant, &events, &listeners);
            events.participant_connected(remote);
        })
    };
    listen(listeners, target, "participantConnected", None, on_connected);

    let on_disconnected = {
        let events = events.clone();
        let listeners = listeners.clone();
        Box::new(move |value: JsValue| {
            let participant: JsParticipant = value.unchecked_into();
            let identity = participant.identity();
            detach_listeners(&listeners, |l| l.owner.as_deref() == Some(identity.as_str()));
            events.participant_disconnected(identity);
        })
    };
    listen(listeners, target, "participantDisconnected", None, on_disconnected);
}

/// Snapshots a participant's subscribed tracks and forwards its future
/// `trackSubscribed` callbacks.
fn watch_participant(
    participant: &JsParticipant,
    events: &EventSink<JsTrack>,
    listeners: &SharedListeners,
) -> RemoteParticipant<JsTrack> {
    let identity = participant.identity();

    let mut tracks = Vec::new();
    participant.tracks().for_each(&mut |value, _key| {
        let publication: JsPublication = value.unchecked_into();
        if publication.is_subscribed() {
            if let Some(track) = publication.track() {
                tracks.push(track);
            }
        }
    });

    let on_track = {
        let events = events.clone();
        let identity = identity.clone();
        Box::new(move |value: JsValue| {
            let track: JsTrack = value.unchecked_into();
            if !events.track_subscribed(identity.as_str(), track) {
                Logger::warn("Track subscribed after the session was dropped");
            }
        })
    };
    listen(
        listeners,
        participant.unchecked_ref(),
        "trackSubscribed",
        Some(identity.clone()),
        on_track,
    );

    RemoteParticipant::new(identity, tracks)
}

fn js_error(value: JsValue) -> SdkError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    SdkError::new(message)
}
