//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. Field names are camelCase on the
//! wire and document identifiers are exposed as `_id`. Every DTO derives `ToSchema` so
//! the generated OpenAPI document describes it.

pub mod api;
pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;
