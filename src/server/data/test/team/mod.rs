use crate::server::{data::team::TeamRepository, error::AppError, model::team::CreateTeamParams};
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod members;
