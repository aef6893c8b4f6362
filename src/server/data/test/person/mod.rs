use crate::server::{
    data::person::PersonRepository,
    model::person::{CreatePersonParam, Dependent, Role},
};
use entity::prelude::Person;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
