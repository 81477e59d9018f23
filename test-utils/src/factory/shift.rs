//! Shift factory for creating test shift records.

use chrono::{DateTime, Duration, Utc};
use entity::shift::ShiftStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shifts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::shift::ShiftFactory;
/// use entity::shift::ShiftStatus;
///
/// let shift = ShiftFactory::new(&db)
///     .assigned_id(user.id)
///     .status(ShiftStatus::NeedsCover)
///     .build()
///     .await?;
/// ```
pub struct ShiftFactory<'a> {
    db: &'a DatabaseConnection,
    assigned_id: i32,
    coverer_id: Option<i32>,
    start_time: DateTime<Utc>,
    status: ShiftStatus,
    emergency: bool,
}

impl<'a> ShiftFactory<'a> {
    /// Creates a new ShiftFactory with default values.
    ///
    /// Defaults:
    /// - assigned_id: `0` (set this to a real user id before building)
    /// - coverer_id: `None`
    /// - start_time: three days from now
    /// - status: `Open`
    /// - emergency: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            assigned_id: 0,
            coverer_id: None,
            start_time: Utc::now() + Duration::days(3),
            status: ShiftStatus::Open,
            emergency: false,
        }
    }

    /// Sets the assigned employee id.
    pub fn assigned_id(mut self, assigned_id: i32) -> Self {
        self.assigned_id = assigned_id;
        self
    }

    /// Sets the covering employee id.
    pub fn coverer_id(mut self, coverer_id: Option<i32>) -> Self {
        self.coverer_id = coverer_id;
        self
    }

    /// Sets the shift start time.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the shift status.
    pub fn status(mut self, status: ShiftStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the emergency flag.
    pub fn emergency(mut self, emergency: bool) -> Self {
        self.emergency = emergency;
        self
    }

    /// Builds and inserts the shift entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shift::Model)` - Created shift entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shift::Model, DbErr> {
        entity::shift::ActiveModel {
            assigned_id: ActiveValue::Set(self.assigned_id),
            coverer_id: ActiveValue::Set(self.coverer_id),
            start_time: ActiveValue::Set(self.start_time),
            status: ActiveValue::Set(self.status),
            emergency: ActiveValue::Set(self.emergency),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shift assigned to the given user with default values.
///
/// Shorthand for `ShiftFactory::new(db).assigned_id(assigned_id).build().await`.
pub async fn create_shift(
    db: &DatabaseConnection,
    assigned_id: i32,
) -> Result<entity::shift::Model, DbErr> {
    ShiftFactory::new(db).assigned_id(assigned_id).build().await
}
