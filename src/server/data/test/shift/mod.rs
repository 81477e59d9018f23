use crate::server::data::shift::ShiftRepository;
use chrono::{Duration, Utc};
use entity::shift::ShiftStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_id;
