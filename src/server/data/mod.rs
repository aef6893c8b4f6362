//! Database repository layer for all document kinds.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! document kind. Repositories use SeaORM entity models internally and return domain
//! models so entity types never leak into services or controllers. Embedded
//! sub-documents are always read and written together with their owner.

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
