pub mod http_helpers;
pub mod test_app;

pub use http_helpers::*;
pub use test_app::*;
