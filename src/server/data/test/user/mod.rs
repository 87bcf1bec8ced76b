use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Role, User},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod admin_exists;
mod create;
mod get_by_role;
