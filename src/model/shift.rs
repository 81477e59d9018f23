use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled work period as exposed over the API.
///
/// `status` carries the raw integer code (1=open, 2=covered, 3=needs cover)
/// to match the query parameters used for filtering and transitions.
#[derive(Serialize, Deserialize, Clone)]
pub struct ShiftDto {
    pub id: i32,
    pub assigned_id: i32,
    pub coverer_id: Option<i32>,
    pub start_time: DateTime<Utc>,
    pub status: i32,
    pub emergency: bool,
}

impl ShiftDto {
    pub fn from_entity(entity: entity::shift::Model) -> Self {
        Self {
            id: entity.id,
            assigned_id: entity.assigned_id,
            coverer_id: entity.coverer_id,
            start_time: entity.start_time,
            status: entity.status as i32,
            emergency: entity.emergency,
        }
    }
}
