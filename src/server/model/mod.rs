//! Operation-specific parameter and filter types for the service layer.

pub mod shift;
pub mod vacation;
