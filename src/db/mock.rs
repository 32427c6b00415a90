use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{DatabaseError, DocumentStore};

/// In-memory store for route tests. `unreachable()` makes every ping fail.
#[derive(Default)]
pub struct MockDocumentStore {
    connected: AtomicBool,
    unreachable: bool,
    pub connects: AtomicUsize,
    pub closes: AtomicUsize,
}

impl MockDocumentStore {
    pub fn connected() -> Self {
        Self {
            connected: AtomicBool::new(true),
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn connect(&self) -> Result<(), DatabaseError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn close(&self) -> Result<(), DatabaseError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        if self.unreachable || !self.connected.load(Ordering::SeqCst) {
            return Err(DatabaseError::NotConnected);
        }
        Ok(())
    }
}
