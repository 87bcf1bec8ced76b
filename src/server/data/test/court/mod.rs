use crate::server::{
    data::court::CourtRepository,
    model::court::{CreateCourtParams, UpdateCourtParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
