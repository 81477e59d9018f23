use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        state::AppState,
    },
};

/// POST /auth/login
/// Establishes a session for the given username.
///
/// Stands in for the external identity layer: the username is trusted as-is
/// and must resolve to an existing employee.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo = UserRepository::new(&state.db);

    let Some(user) = user_repo.get_by_username(&dto.username).await? else {
        return Err(AuthError::UnknownUsername(dto.username).into());
    };

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}

/// GET /auth/logout
/// Clears the caller's session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// GET /auth/user
/// Returns the currently logged-in user.
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}
