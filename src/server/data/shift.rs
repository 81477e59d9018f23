use entity::shift::ShiftStatus;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct ShiftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all shifts, in storage order.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All shift rows
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find().all(self.db).await
    }

    /// Gets a shift by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The shift
    /// - `Ok(None)`: No shift with that id
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find_by_id(id).one(self.db).await
    }

    /// Conditionally transitions a shift's status.
    ///
    /// Writes the new status, emergency flag, and coverer in a single UPDATE
    /// that only matches while the row still holds `expected`. Concurrent
    /// callers racing on the same shift therefore cannot overwrite each
    /// other's transition: the loser's UPDATE matches zero rows.
    ///
    /// # Arguments
    /// - `id`: Shift id
    /// - `expected`: Status the shift held when the caller read it
    /// - `to`: Status to transition to
    /// - `emergency`: New emergency flag
    /// - `coverer_id`: New coverer, or `None` to clear
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The shift after the transition
    /// - `Ok(None)`: The shift no longer held `expected`; nothing was written
    /// - `Err(DbErr)`: Database error
    pub async fn transition_status(
        &self,
        id: i32,
        expected: ShiftStatus,
        to: ShiftStatus,
        emergency: bool,
        coverer_id: Option<i32>,
    ) -> Result<Option<entity::shift::Model>, DbErr> {
        let result = entity::prelude::Shift::update_many()
            .col_expr(entity::shift::Column::Status, Expr::value(to))
            .col_expr(entity::shift::Column::Emergency, Expr::value(emergency))
            .col_expr(entity::shift::Column::CovererId, Expr::value(coverer_id))
            .filter(entity::shift::Column::Id.eq(id))
            .filter(entity::shift::Column::Status.eq(expected))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }
}
