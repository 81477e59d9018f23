pub mod cover_request;
pub mod shift;
pub mod user;
pub mod vacation;

pub mod prelude;
