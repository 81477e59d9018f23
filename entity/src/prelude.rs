pub use super::cover_request::Entity as CoverRequest;
pub use super::shift::Entity as Shift;
pub use super::user::Entity as User;
pub use super::vacation::Entity as Vacation;
