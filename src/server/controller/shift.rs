use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{cover_request::CoverRequestDto, shift::ShiftDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::shift::ShiftFilter,
        service::shift::ShiftService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct ShiftListQuery {
    #[serde(default)]
    pub mine: bool,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub assigned: bool,
}

#[derive(Deserialize)]
pub struct ShiftUpdateQuery {
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub emergency: bool,
}

/// GET /shifts
/// List shifts, optionally filtered by coverer (`mine`), emergency flag,
/// status code, and assignee (`assigned`). Filters combine conjunctively.
pub async fn get_shifts(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ShiftListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let filter = ShiftFilter {
        mine: query.mine,
        emergency: query.emergency,
        status: query.status,
        assigned: query.assigned,
    };

    let shifts = ShiftService::new(&state.db).list(&filter, &user).await?;

    let dtos: Vec<ShiftDto> = shifts.into_iter().map(ShiftDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /shift/date/{day}
/// List shifts starting on the given `YYYY-MM-DD` day.
pub async fn get_shifts_by_day(
    State(state): State<AppState>,
    session: Session,
    Path(day): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require().await?;

    let shifts = ShiftService::new(&state.db).list_by_day(&day).await?;

    let dtos: Vec<ShiftDto> = shifts.into_iter().map(ShiftDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /shift/{id}
/// Get a shift by id.
pub async fn get_shift(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require().await?;

    let shift = ShiftService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ShiftDto::from_entity(shift))))
}

/// POST /shift/{id}
/// Volunteer to cover the shift. The shift must be in needs-cover status.
pub async fn create_cover_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let request = ShiftService::new(&state.db).request_cover(id, &user).await?;

    Ok((
        StatusCode::CREATED,
        Json(CoverRequestDto::from_entity(request)),
    ))
}

/// PUT /shift/{id}
/// Change the shift's status or declare an emergency. Only the assigned
/// employee may do either; see `ShiftService::update_status` for the legal
/// transitions.
pub async fn update_shift_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(query): Query<ShiftUpdateQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let shift = ShiftService::new(&state.db)
        .update_status(id, query.status, query.emergency, &user)
        .await?;

    Ok((StatusCode::OK, Json(ShiftDto::from_entity(shift))))
}

/// DELETE /shift/{id}
/// Withdraw the caller's cover request for the shift. Idempotent.
pub async fn delete_cover_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    ShiftService::new(&state.db).withdraw_cover(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /shift/coverrequest
/// List the caller's open cover requests.
pub async fn get_cover_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let requests = ShiftService::new(&state.db).cover_requests_for(&user).await?;

    let dtos: Vec<CoverRequestDto> = requests
        .into_iter()
        .map(CoverRequestDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
