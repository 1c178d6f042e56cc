use crate::api::AppState;
use crate::error::ApiError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use roomcall_core::{TokenRequest, TokenResponse};
use tracing::{info, warn};

/// `POST /generate-token`
///
/// A body that is not JSON (or not an object of strings) is treated the same
/// as one with missing fields.
pub async fn generate_token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Unreadable token request: {}", rejection.body_text());
            return Err(ApiError::MissingField);
        }
    };

    if !request.is_complete() {
        return Err(ApiError::MissingField);
    }

    let identity = request.identity.trim();
    let room = request.room_name.trim();
    let token = state.issuer.issue(identity, room)?;

    info!("Issued token for '{}' in room '{}'", identity, room);
    Ok(Json(TokenResponse { token }))
}
