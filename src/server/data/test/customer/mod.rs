use crate::server::{
    data::customer::CustomerRepository,
    model::customer::{CreateCustomerParam, Invoice, LineItem},
};
use entity::prelude::Customer;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_name;
mod get_all;
mod save_invoices;
