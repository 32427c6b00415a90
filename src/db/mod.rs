//! Document database collaborator.
//!
//! The HTTP layer only needs two lifecycle hooks and a liveness probe, so the
//! store is injected as `Arc<dyn DocumentStore>`. That keeps startup and the
//! health route testable without a running MongoDB.

use async_trait::async_trait;

#[cfg(test)]
pub mod mock;
mod mongo;

#[cfg(test)]
pub use mock::MockDocumentStore;
pub use mongo::MongoStore;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("mongodb: {0}")]
    Driver(#[from] mongodb::error::Error),
    #[error("database connection is not open")]
    NotConnected,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Opens the connection. Called once, before the server accepts requests.
    async fn connect(&self) -> Result<(), DatabaseError>;

    /// Releases the connection. Called once, after the server has stopped.
    /// Closing a store that was never connected is a no-op.
    async fn close(&self) -> Result<(), DatabaseError>;

    /// Round-trips to the server.
    async fn ping(&self) -> Result<(), DatabaseError>;
}
