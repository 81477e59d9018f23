use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is stored in the session.
    ///
    /// The caller either never logged in or the session expired. Results in a
    /// 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// The user id stored in the session does not resolve to a user row,
    /// typically because the account was removed after login. Results in a
    /// 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login was attempted with a username that does not exist.
    #[error("Unknown username: {0}")]
    UnknownUsername(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized. The full error is logged at debug
/// level while the client-facing message stays generic to avoid confirming
/// which usernames exist.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "You must be logged in.".to_string(),
            }),
        )
            .into_response()
    }
}
