//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each domain entity. Repositories work with SeaORM entity models and keep all
//! queries, inserts, updates, and deletes in one place per entity.

pub mod cover_request;
pub mod shift;
pub mod user;
pub mod vacation;
