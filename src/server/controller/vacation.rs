use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::vacation::{CreateVacationDto, VacationDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::vacation::VacationFilter,
        service::vacation::VacationService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct VacationListQuery {
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub mine: bool,
}

/// POST /vacations
/// Create a vacation request for the caller. The employee id always comes
/// from the session, not the request body.
pub async fn create_vacation(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateVacationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let vacation = VacationService::new(&state.db)
        .create(dto.start_date, dto.end_date, &user)
        .await?;

    Ok((StatusCode::CREATED, Json(VacationDto::from_entity(vacation))))
}

/// GET /vacations
/// List vacations, optionally filtered by status code and caller ownership.
pub async fn get_vacations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<VacationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let filter = VacationFilter {
        status: query.status,
        mine: query.mine,
    };

    let vacations = VacationService::new(&state.db).list(&filter, &user).await?;

    let dtos: Vec<VacationDto> = vacations.into_iter().map(VacationDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /vacations/{id}
/// List all vacations for the given employee, regardless of status.
pub async fn get_vacations_by_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require().await?;

    let vacations = VacationService::new(&state.db).list_by_employee(id).await?;

    let dtos: Vec<VacationDto> = vacations.into_iter().map(VacationDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
