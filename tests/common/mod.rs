#![allow(dead_code)]

use async_trait::async_trait;
use exam_paper_api::configuration::Settings;
use exam_paper_api::db::{DatabaseError, DocumentStore};
use exam_paper_api::startup::Application;
use exam_paper_api::telemetry::{get_subscriber, init_subscriber};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::task::JoinHandle;

static TRACING: OnceLock<()> = OnceLock::new();

// TEST_LOG=true cargo test -- --nocapture to see server logs
fn init_tracing() {
    TRACING.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::stdout));
        } else {
            init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink));
        }
    });
}

/// Stands in for MongoDB and counts lifecycle calls.
#[derive(Default)]
pub struct CountingStore {
    connected: AtomicBool,
    pub connects: AtomicUsize,
    pub closes: AtomicUsize,
    pub pings: AtomicUsize,
}

impl CountingStore {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
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
        self.pings.fetch_add(1, Ordering::SeqCst);
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DatabaseError::NotConnected)
        }
    }
}

pub struct TestApp {
    pub address: String,
    pub store: Arc<CountingStore>,
    pub handle: actix_web::dev::ServerHandle,
    pub server: JoinHandle<Result<(), exam_paper_api::startup::StartupError>>,
}

impl TestApp {
    /// Graceful stop, waits until the database has been closed.
    pub async fn shutdown(self) {
        self.handle.stop(true).await;
        self.server
            .await
            .expect("server task panicked")
            .expect("server failed");
    }
}

pub async fn spawn_app() -> TestApp {
    init_tracing();

    let settings = Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        ..Default::default()
    };
    let store = Arc::new(CountingStore::default());

    let application = Application::build(settings, store.clone())
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", application.port());
    let handle = application.handle();

    let server = tokio::spawn(application.run_until_stopped());
    println!("Used address: {}", address);

    TestApp {
        address,
        store,
        handle,
        server,
    }
}
