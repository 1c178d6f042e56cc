use crate::token::TokenIssuer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<TokenIssuer>,
}
