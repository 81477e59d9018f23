use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct CoverRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoverRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a cover request for a shift.
    ///
    /// # Arguments
    /// - `shift_id`: Shift the coverer is volunteering for
    /// - `coverer_id`: Volunteering employee's user id
    ///
    /// # Returns
    /// - `Ok(Model)`: The created cover request
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        shift_id: i32,
        coverer_id: i32,
    ) -> Result<entity::cover_request::Model, DbErr> {
        entity::cover_request::ActiveModel {
            shift_id: ActiveValue::Set(shift_id),
            coverer_id: ActiveValue::Set(coverer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes the coverer's request for a shift, if one exists.
    ///
    /// Deletion is best-effort: removing a request that does not exist is not
    /// an error.
    ///
    /// # Arguments
    /// - `shift_id`: Shift the request was filed against
    /// - `coverer_id`: Employee withdrawing the request
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows removed (0 or 1)
    /// - `Err(DbErr)`: Database error
    pub async fn delete_by_shift_and_coverer(
        &self,
        shift_id: i32,
        coverer_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::CoverRequest::delete_many()
            .filter(entity::cover_request::Column::ShiftId.eq(shift_id))
            .filter(entity::cover_request::Column::CovererId.eq(coverer_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets all cover requests filed by an employee.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: The employee's cover requests
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_coverer(
        &self,
        coverer_id: i32,
    ) -> Result<Vec<entity::cover_request::Model>, DbErr> {
        entity::prelude::CoverRequest::find()
            .filter(entity::cover_request::Column::CovererId.eq(coverer_id))
            .all(self.db)
            .await
    }
}
