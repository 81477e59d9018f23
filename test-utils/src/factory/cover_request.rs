//! Cover request factory for creating test cover request records.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a cover request linking the given shift and coverer.
///
/// Cover requests have no optional fields, so no builder is provided.
///
/// # Arguments
/// - `db` - Database connection
/// - `shift_id` - Shift the coverer is volunteering for
/// - `coverer_id` - Volunteering employee's user id
///
/// # Returns
/// - `Ok(entity::cover_request::Model)` - Created cover request entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_cover_request(
    db: &DatabaseConnection,
    shift_id: i32,
    coverer_id: i32,
) -> Result<entity::cover_request::Model, DbErr> {
    entity::cover_request::ActiveModel {
        shift_id: ActiveValue::Set(shift_id),
        coverer_id: ActiveValue::Set(coverer_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
