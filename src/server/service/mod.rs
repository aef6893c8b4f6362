//! Business logic layer.
//!
//! Services sit between controllers and repositories. They validate parameters before
//! anything reaches the store, translate missing documents into `AppError::NotFound`,
//! and serialize appends to the same document through [`lock::DocumentLocks`].

pub mod composer;
pub mod customer;
pub mod lock;
pub mod person;
pub mod session;
pub mod team;
