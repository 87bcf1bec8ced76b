use crate::server::{
    error::{auth::AuthError, AppError},
    model::{auth::Caller, user::User},
    service::lock::KeyedLocks,
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::at};

mod client;
mod user;

/// Wraps a stored user row as a request caller.
fn caller(model: entity::user::Model) -> Caller {
    Caller::User(User::from_entity(model).unwrap())
}
