mod config;
mod error;
mod events;
mod sdk;
mod session;
mod token_client;
mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::ClientConfig;
pub use error::{ClientError, InputField, SdkError};
pub use events::*;
pub use sdk::*;
pub use session::*;
pub use token_client::{HttpTokenProvider, TokenProvider};
pub use view::*;

pub use roomcall_core::{ConnectionStatus, Identity, MediaKind, MediaSelection, RoomName};
