use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::vacation::VacationRepository,
    error::AppError,
    model::vacation::{CreateVacationParams, VacationFilter},
};

pub struct VacationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vacation request for the caller.
    ///
    /// The date range must be well-formed (start strictly before end) and must
    /// not start in the past. The employee id is always the caller's,
    /// regardless of what the client supplied.
    ///
    /// # Arguments
    /// - `start_date` / `end_date`: Requested date range
    /// - `caller`: The authenticated employee
    ///
    /// # Returns
    /// - `Ok(Model)`: The created vacation, pending approval
    /// - `Err(AppError::BadRequest)`: Invalid date range
    pub async fn create(
        &self,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
        caller: &entity::user::Model,
    ) -> Result<entity::vacation::Model, AppError> {
        if start_date >= end_date {
            return Err(AppError::BadRequest(
                "The vacation's start date must be before the end date.".to_string(),
            ));
        }

        if start_date < Utc::now().date_naive() {
            return Err(AppError::BadRequest(
                "You can not create a vacation in the past.".to_string(),
            ));
        }

        let vacation = VacationRepository::new(self.db)
            .create(CreateVacationParams {
                employee_id: caller.id,
                start_date,
                end_date,
            })
            .await?;

        Ok(vacation)
    }

    /// Lists vacations matching the filter set.
    ///
    /// Fetches all vacations and applies the selected predicates
    /// conjunctively: exact status code, then caller ownership.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Vacations satisfying every selected predicate
    /// - `Err(AppError)`: Database error
    pub async fn list(
        &self,
        filter: &VacationFilter,
        caller: &entity::user::Model,
    ) -> Result<Vec<entity::vacation::Model>, AppError> {
        let vacations = VacationRepository::new(self.db).get_all().await?;

        Ok(apply_filters(vacations, filter, caller.id))
    }

    /// Lists an employee's vacations, all statuses.
    pub async fn list_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::vacation::Model>, AppError> {
        let vacations = VacationRepository::new(self.db)
            .get_by_employee(employee_id)
            .await?;

        Ok(vacations)
    }
}

/// Applies the selected vacation filters conjunctively: exact status code,
/// then caller ownership.
///
/// Pure function over the input sequence; unknown status codes match nothing.
fn apply_filters(
    vacations: Vec<entity::vacation::Model>,
    filter: &VacationFilter,
    caller_id: i32,
) -> Vec<entity::vacation::Model> {
    vacations
        .into_iter()
        .filter(|v| filter.status <= 0 || v.status as i32 == filter.status)
        .filter(|v| !filter.mine || v.employee_id == caller_id)
        .collect()
}
