//! Data transfer objects for the HTTP API.

pub mod api;
pub mod cover_request;
pub mod shift;
pub mod user;
pub mod vacation;
