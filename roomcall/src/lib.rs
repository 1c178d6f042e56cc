pub use roomcall_core::model::{ConnectionStatus, Identity, RoomName};

pub mod model {
    pub use roomcall_core::model::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use roomcall_server::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use roomcall_client::*;
}
