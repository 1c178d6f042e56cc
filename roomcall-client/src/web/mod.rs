//! Browser glue: Twilio Video bindings, the DOM view and the exported app.

mod app;
mod dom_view;
mod logger;
mod twilio;

pub use app::CallApp;
pub use dom_view::DomView;
pub use twilio::{JsRoom, JsTrack, TwilioRoom, TwilioSdk};
