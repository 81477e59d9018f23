//! HTTP request handlers.
//!
//! Controllers resolve the calling user through the auth guard, convert
//! request data into service parameters, and convert entity models back into
//! DTOs for the response.

pub mod auth;
pub mod shift;
pub mod user;
pub mod vacation;
