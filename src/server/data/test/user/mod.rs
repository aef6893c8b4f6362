use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use entity::prelude::User;
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_name;
