//! Service layer for business logic and orchestration.
//!
//! Sits between the controller (API) layer and the data (repository) layer.
//! Services implement the scheduling business rules (shift filtering, the
//! status state machine, vacation validation) and coordinate repository calls.

pub mod shift;
pub mod vacation;
