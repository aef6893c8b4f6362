//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! stored documents and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types implement the shared `Validate` contract.

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;
