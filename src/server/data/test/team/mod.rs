use crate::server::{
    data::team::TeamRepository,
    model::team::{CreateTeamParam, Player},
};
use entity::prelude::Team;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod save_players;
