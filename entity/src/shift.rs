use sea_orm::entity::prelude::*;

/// Lifecycle of a shift. The integer codes are stable and appear verbatim in
/// the HTTP API (`?status=` filters and transition requests).
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ShiftStatus {
    /// Shift is assigned and will be worked as scheduled.
    Open = 1,
    /// Shift has been covered or approved off.
    Covered = 2,
    /// The assigned employee wants the shift covered.
    NeedsCover = 3,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shift")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Employee the shift is assigned to.
    pub assigned_id: i32,
    /// Employee currently covering the shift, if any.
    pub coverer_id: Option<i32>,
    pub start_time: DateTimeUtc,
    pub status: ShiftStatus,
    /// Set when the assigned employee declared a same-day emergency.
    pub emergency: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::cover_request::Entity")]
    CoverRequest,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::cover_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoverRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
