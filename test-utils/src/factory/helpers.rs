//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a shift together with its assigned employee.
///
/// Convenience method that creates a user and then a shift assigned to that
/// user, both with default values. Use the individual factories when the test
/// needs to customize either entity.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, shift))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_shift_with_assignee(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::shift::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let shift = crate::factory::shift::ShiftFactory::new(db)
        .assigned_id(user.id)
        .build()
        .await?;

    Ok((user, shift))
}
