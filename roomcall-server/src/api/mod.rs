mod app_state;
mod router;
mod token_handler;

pub use app_state::AppState;
pub use router::{TOKEN_ROUTE, router};
pub use token_handler::generate_token;
