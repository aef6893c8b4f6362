//! HTTP API backend.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for storage. Each
//! document kind (composer, customer, person, team, user) is stored in its own table with
//! embedded sub-documents kept in JSON columns.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, not-found handling, append locking, password hashing
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, document locks)
//! - **Startup** (`startup`) - Tracing, database connection and shutdown signal handling
//! - **Router** (`router`) - Route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **Controller** converts the DTO to params and calls the service
//! 3. **Service** validates params and runs the operation, locking the owner document for appends
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and answers only after persistence completed

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
