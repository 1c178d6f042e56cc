pub mod mock_view;
pub mod test_session;

pub use mock_sdk::*;
pub use mock_tokens::*;
pub use mock_view::*;
pub use test_session::*;
