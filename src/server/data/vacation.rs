use entity::vacation::VacationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::vacation::CreateVacationParams;

pub struct VacationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vacation request in pending status.
    ///
    /// # Arguments
    /// - `params`: Employee id and date range for the request
    ///
    /// # Returns
    /// - `Ok(Model)`: The created vacation
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateVacationParams,
    ) -> Result<entity::vacation::Model, DbErr> {
        entity::vacation::ActiveModel {
            employee_id: ActiveValue::Set(params.employee_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            status: ActiveValue::Set(VacationStatus::Pending),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all vacations, in storage order.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All vacation rows
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::vacation::Model>, DbErr> {
        entity::prelude::Vacation::find().all(self.db).await
    }

    /// Gets all vacations for an employee, regardless of status.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: The employee's vacations
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<entity::vacation::Model>, DbErr> {
        entity::prelude::Vacation::find()
            .filter(entity::vacation::Column::EmployeeId.eq(employee_id))
            .all(self.db)
            .await
    }
}
