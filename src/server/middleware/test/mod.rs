use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
};
use entity::prelude::User;
use sea_orm::ModelTrait;
use test_utils::{builder::TestBuilder, factory};
