use crate::server::{
    data::composer::ComposerRepository,
    model::composer::{CreateComposerParam, UpdateComposerParam},
};
use entity::prelude::Composer;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;
