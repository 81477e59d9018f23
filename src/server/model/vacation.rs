//! Parameter and filter types for vacation operations.

use chrono::NaiveDate;

/// Conjunctive filter set for listing vacations.
#[derive(Debug, Clone, Default)]
pub struct VacationFilter {
    /// Only vacations with this exact status code; `0` disables the filter.
    pub status: i32,
    /// Only the caller's own vacations.
    pub mine: bool,
}

/// Parameters for creating a vacation request.
///
/// The employee id comes from the authenticated caller, never from client
/// input. New requests always start out pending.
#[derive(Debug, Clone)]
pub struct CreateVacationParams {
    pub employee_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
