use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub full_name: String,
}

impl UserDto {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            full_name: entity.full_name,
        }
    }
}

/// Login request body. The username stands in for the external identity
/// layer; no credential check happens here.
#[derive(Deserialize)]
pub struct LoginDto {
    pub username: String,
}
