//! Vacation factory for creating test vacation records.

use chrono::{Duration, NaiveDate, Utc};
use entity::vacation::VacationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vacations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vacation::VacationFactory;
/// use entity::vacation::VacationStatus;
///
/// let vacation = VacationFactory::new(&db)
///     .employee_id(user.id)
///     .status(VacationStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct VacationFactory<'a> {
    db: &'a DatabaseConnection,
    employee_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: VacationStatus,
}

impl<'a> VacationFactory<'a> {
    /// Creates a new VacationFactory with default values.
    ///
    /// Defaults:
    /// - employee_id: `0` (set this to a real user id before building)
    /// - start_date: one week from today
    /// - end_date: two weeks from today
    /// - status: `Pending`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            employee_id: 0,
            start_date: today + Duration::days(7),
            end_date: today + Duration::days(14),
            status: VacationStatus::Pending,
        }
    }

    /// Sets the employee id.
    pub fn employee_id(mut self, employee_id: i32) -> Self {
        self.employee_id = employee_id;
        self
    }

    /// Sets the start date.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the end date.
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the vacation status.
    pub fn status(mut self, status: VacationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the vacation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vacation::Model)` - Created vacation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vacation::Model, DbErr> {
        entity::vacation::ActiveModel {
            employee_id: ActiveValue::Set(self.employee_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vacation for the given employee with default values.
///
/// Shorthand for `VacationFactory::new(db).employee_id(employee_id).build().await`.
pub async fn create_vacation(
    db: &DatabaseConnection,
    employee_id: i32,
) -> Result<entity::vacation::Model, DbErr> {
    VacationFactory::new(db)
        .employee_id(employee_id)
        .build()
        .await
}
