//! Application state shared across all request handlers.
//!
//! The state is built once at startup and cloned into each handler through Axum's state
//! extraction. Both fields are cheap to clone: the connection pool and the lock registry
//! are reference counted internally.

use sea_orm::DatabaseConnection;

use crate::server::service::lock::DocumentLocks;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per-document locks serializing invoice and player appends.
    pub locks: DocumentLocks,
}

impl AppState {
    /// Creates the application state around an established database connection.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    ///
    /// # Returns
    /// - `AppState` - State with an empty lock registry
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            locks: DocumentLocks::new(),
        }
    }
}
