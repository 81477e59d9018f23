use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct CoverRequestDto {
    pub id: i32,
    pub shift_id: i32,
    pub coverer_id: i32,
}

impl CoverRequestDto {
    pub fn from_entity(entity: entity::cover_request::Model) -> Self {
        Self {
            id: entity.id,
            shift_id: entity.shift_id,
            coverer_id: entity.coverer_id,
        }
    }
}
