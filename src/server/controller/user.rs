use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::auth::AuthGuard, state::AppState};

/// GET /shifts/username
/// Returns the caller's full display name.
pub async fn get_full_name(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.full_name)))
}
