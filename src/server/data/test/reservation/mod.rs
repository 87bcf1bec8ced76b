use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{slot_length, ReservationFilter, ReservationSlotParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::at};

mod count_for_court;
mod find_overlapping;
mod get_all;
mod update;
