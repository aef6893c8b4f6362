//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test documents with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let composer = factory::composer::create_composer(&db).await?;
//!     let team = factory::team::TeamFactory::new(&db)
//!         .name("Giants")
//!         .player("Joe", "Smith", 50000.0)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `composer` - Create composer documents
//! - `customer` - Create customer documents, optionally with invoices
//! - `person` - Create person documents
//! - `team` - Create team documents, optionally with players
//! - `user` - Create user documents with a pre-computed password hash

pub mod composer;
pub mod customer;
pub mod helpers;
pub mod person;
pub mod team;
pub mod user;

pub use composer::create_composer;
pub use customer::create_customer;
pub use person::create_person;
pub use team::create_team;
pub use user::create_user;
