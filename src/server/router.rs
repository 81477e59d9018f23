use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, login, logout},
        shift::{
            create_cover_request, delete_cover_request, get_cover_requests, get_shift, get_shifts,
            get_shifts_by_day, update_shift_status,
        },
        user::get_full_name,
        vacation::{create_vacation, get_vacations, get_vacations_by_employee},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", get(logout))
        .route("/auth/user", get(get_user))
        .route("/shifts", get(get_shifts))
        .route("/shifts/username", get(get_full_name))
        .route("/shift/date/{day}", get(get_shifts_by_day))
        .route("/shift/coverrequest", get(get_cover_requests))
        .route(
            "/shift/{id}",
            get(get_shift)
                .post(create_cover_request)
                .put(update_shift_status)
                .delete(delete_cover_request),
        )
        .route("/vacations", get(get_vacations).post(create_vacation))
        .route("/vacations/{id}", get(get_vacations_by_employee))
}
