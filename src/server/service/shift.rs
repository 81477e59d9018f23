use chrono::{Duration, NaiveDate, Utc};
use entity::shift::ShiftStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cover_request::CoverRequestRepository, shift::ShiftRepository},
    error::AppError,
    model::shift::ShiftFilter,
};

pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists shifts matching the filter set.
    ///
    /// Fetches all shifts and applies the selected predicates conjunctively:
    /// coverer-is-caller, emergency-only, exact status, assignee-is-caller.
    /// Order is inherited from storage.
    ///
    /// # Arguments
    /// - `filter`: Selected filter predicates
    /// - `caller`: The authenticated employee
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Shifts satisfying every selected predicate
    /// - `Err(AppError)`: Database error
    pub async fn list(
        &self,
        filter: &ShiftFilter,
        caller: &entity::user::Model,
    ) -> Result<Vec<entity::shift::Model>, AppError> {
        let shifts = ShiftRepository::new(self.db).get_all().await?;

        Ok(apply_filters(shifts, filter, caller.id))
    }

    /// Lists shifts starting on the given calendar day.
    ///
    /// # Arguments
    /// - `day`: Date string in `YYYY-MM-DD` form
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Shifts whose start date equals the day
    /// - `Err(AppError::BadRequest)`: The string is not a valid date
    pub async fn list_by_day(&self, day: &str) -> Result<Vec<entity::shift::Model>, AppError> {
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest(
                "Please provide a valid date formatted as [yyyy-mm-dd].".to_string(),
            )
        })?;

        let shifts = ShiftRepository::new(self.db).get_all().await?;

        Ok(shifts
            .into_iter()
            .filter(|s| s.start_time.date_naive() == date)
            .collect())
    }

    /// Gets a shift by id.
    ///
    /// # Returns
    /// - `Ok(Model)`: The shift
    /// - `Err(AppError::NotFound)`: No shift with that id
    pub async fn get_by_id(&self, id: i32) -> Result<entity::shift::Model, AppError> {
        ShiftRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shift not found.".to_string()))
    }

    /// Files a cover request by the caller for a shift.
    ///
    /// Only shifts in needs-cover status accept cover requests.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created cover request
    /// - `Err(AppError::NotFound)`: No shift with that id
    /// - `Err(AppError::BadRequest)`: The shift is not taking cover requests
    pub async fn request_cover(
        &self,
        shift_id: i32,
        caller: &entity::user::Model,
    ) -> Result<entity::cover_request::Model, AppError> {
        let shift = self.get_by_id(shift_id).await?;

        if shift.status != ShiftStatus::NeedsCover {
            return Err(AppError::BadRequest(
                "This shift is not taking cover requests.".to_string(),
            ));
        }

        let request = CoverRequestRepository::new(self.db)
            .create(shift_id, caller.id)
            .await?;

        Ok(request)
    }

    /// Applies a status change or emergency declaration to the caller's shift.
    ///
    /// Only the assigned employee may change a shift. Two mutually exclusive
    /// paths:
    ///
    /// - **Emergency** (`emergency = true`): allowed only while the shift
    ///   starts within the next 24 hours. The shift becomes needs-cover with
    ///   the emergency flag set and any coverer cleared.
    /// - **Status** (`requested_status > 0`): the only legal transitions are
    ///   open → covered (coverer cleared) and covered → open (coverer set to
    ///   the caller).
    ///
    /// With neither path selected the shift is returned unchanged.
    ///
    /// The write is conditional on the status observed above; if another
    /// caller changed the shift in between, the transition is rejected rather
    /// than overwriting their update.
    ///
    /// # Returns
    /// - `Ok(Model)`: The shift after the transition
    /// - `Err(AppError::NotFound)`: No shift with that id
    /// - `Err(AppError::BadRequest)`: Caller not assigned, emergency window
    ///   exceeded, or illegal transition
    pub async fn update_status(
        &self,
        shift_id: i32,
        requested_status: i32,
        emergency: bool,
        caller: &entity::user::Model,
    ) -> Result<entity::shift::Model, AppError> {
        let shift = self.get_by_id(shift_id).await?;

        if shift.assigned_id != caller.id {
            return Err(AppError::BadRequest(
                "You are not assigned to this shift.".to_string(),
            ));
        }

        let (to, new_emergency, coverer_id) = if emergency {
            if shift.start_time >= Utc::now() + Duration::days(1) {
                return Err(AppError::BadRequest(
                    "You can not schedule an emergency more than 24 hours out.".to_string(),
                ));
            }
            (ShiftStatus::NeedsCover, true, None)
        } else if requested_status > 0 {
            match (requested_status, shift.status) {
                (2, ShiftStatus::Open) => (ShiftStatus::Covered, shift.emergency, None),
                (1, ShiftStatus::Covered) => (ShiftStatus::Open, shift.emergency, Some(caller.id)),
                _ => {
                    return Err(AppError::BadRequest("Illegal status change.".to_string()));
                }
            }
        } else {
            return Ok(shift);
        };

        ShiftRepository::new(self.db)
            .transition_status(shift_id, shift.status, to, new_emergency, coverer_id)
            .await?
            // The conditional update matched nothing: someone else changed the
            // shift between our read and write.
            .ok_or_else(|| AppError::BadRequest("Illegal status change.".to_string()))
    }

    /// Withdraws the caller's cover request for a shift.
    ///
    /// Idempotent: withdrawing a request that does not exist succeeds.
    pub async fn withdraw_cover(
        &self,
        shift_id: i32,
        caller: &entity::user::Model,
    ) -> Result<(), AppError> {
        CoverRequestRepository::new(self.db)
            .delete_by_shift_and_coverer(shift_id, caller.id)
            .await?;

        Ok(())
    }

    /// Lists the caller's open cover requests.
    pub async fn cover_requests_for(
        &self,
        caller: &entity::user::Model,
    ) -> Result<Vec<entity::cover_request::Model>, AppError> {
        let requests = CoverRequestRepository::new(self.db)
            .get_by_coverer(caller.id)
            .await?;

        Ok(requests)
    }
}

/// Applies the selected shift filters conjunctively, in order: mine (caller is
/// coverer), emergency, exact status code, assigned (caller is assignee).
///
/// Pure function over the input sequence; unknown status codes match nothing.
fn apply_filters(
    shifts: Vec<entity::shift::Model>,
    filter: &ShiftFilter,
    caller_id: i32,
) -> Vec<entity::shift::Model> {
    shifts
        .into_iter()
        .filter(|s| !filter.mine || s.coverer_id == Some(caller_id))
        .filter(|s| !filter.emergency || s.emergency)
        .filter(|s| filter.status <= 0 || s.status as i32 == filter.status)
        .filter(|s| !filter.assigned || s.assigned_id == caller_id)
        .collect()
}
