mod identity;
mod media;
mod room;
mod status;
mod token;

pub use identity::Identity;
pub use media::{MediaKind, MediaSelection};
pub use room::RoomName;
pub use status::ConnectionStatus;
pub use token::{ErrorResponse, TokenRequest, TokenResponse};
