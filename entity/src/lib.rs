//! SeaORM entity models for every stored document kind.
//!
//! Each document is one row; embedded sub-documents (invoices, players, roles, ...)
//! live inline in typed JSON columns so the owner is always read and written whole.

pub mod prelude;

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;
