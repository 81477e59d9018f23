use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A vacation request as exposed over the API.
///
/// `status` carries the raw integer code (1=pending, 2=approved, 3=denied),
/// matching the `?status=` filter parameter.
#[derive(Serialize, Deserialize, Clone)]
pub struct VacationDto {
    pub id: i32,
    pub employee_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: i32,
}

impl VacationDto {
    pub fn from_entity(entity: entity::vacation::Model) -> Self {
        Self {
            id: entity.id,
            employee_id: entity.employee_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: entity.status as i32,
        }
    }
}

/// Vacation creation request body.
///
/// The employee id is always taken from the session, never from the client,
/// and new requests always start out pending.
#[derive(Deserialize)]
pub struct CreateVacationDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
