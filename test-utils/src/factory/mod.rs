//! Entity factories for seeding test databases.
//!
//! Each factory creates one entity type with sensible defaults that can be
//! overridden through a builder pattern, keeping test setup short.

pub mod cover_request;
pub mod helpers;
pub mod shift;
pub mod user;
pub mod vacation;
