use crate::configuration::Settings;
use crate::cors::{self, CorsError};
use crate::db::{DatabaseError, DocumentStore};
use crate::health::HealthChecker;
use crate::routes;
use actix_web::dev::{Server, ServerHandle};
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database lifecycle failed: {0}")]
    Database(#[from] DatabaseError),
    #[error("invalid CORS policy: {0}")]
    InvalidCors(#[from] CorsError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn DocumentStore>,
    settings: Settings,
) -> Result<Server, StartupError> {
    settings.cors.validate()?;

    let health_checker = web::Data::new(HealthChecker::new(store));
    let openapi = routes::docs::openapi(&settings);
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors::build(&settings.cors))
            .app_data(health_checker.clone())
            .app_data(settings.clone())
            .configure(routes::configure)
            .service(routes::docs::swagger_ui(openapi.clone()))
            .default_service(web::route().to(routes::not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// A bound server whose database connection is already open.
pub struct Application {
    port: u16,
    server: Server,
    store: Arc<dyn DocumentStore>,
}

impl Application {
    /// Connects the store, then binds `settings.address()`. Nothing listens
    /// until the connection succeeded.
    pub async fn build(
        settings: Settings,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, StartupError> {
        store.connect().await?;

        match Self::bind(settings, store.clone()) {
            Ok((port, server)) => Ok(Self {
                port,
                server,
                store,
            }),
            Err(err) => {
                if let Err(close_err) = store.close().await {
                    tracing::error!("Failed to close database after startup error: {}", close_err);
                }
                Err(err)
            }
        }
    }

    fn bind(
        settings: Settings,
        store: Arc<dyn DocumentStore>,
    ) -> Result<(u16, Server), StartupError> {
        let address = settings.address();
        tracing::info!("Start server at {:?}", &address);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, store, settings)?;

        Ok((port, server))
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn handle(&self) -> ServerHandle {
        self.server.handle()
    }

    /// Serves until the server stops (signal or [`ServerHandle::stop`]), then
    /// closes the database connection.
    pub async fn run_until_stopped(self) -> Result<(), StartupError> {
        let served = self.server.await;
        tracing::info!("Server stopped, closing database connection");
        self.store.close().await?;
        served?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::CorsSettings;
    use crate::db::MockDocumentStore;
    use std::sync::atomic::Ordering;

    fn local_settings() -> Settings {
        Settings {
            app_host: "127.0.0.1".to_string(),
            app_port: 0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn invalid_cors_closes_the_opened_connection() {
        let store = Arc::new(MockDocumentStore::default());
        let settings = Settings {
            cors: CorsSettings {
                allowed_origins: vec!["*".to_string()],
                ..Default::default()
            },
            ..local_settings()
        };

        let result = Application::build(settings, store.clone()).await;

        assert!(matches!(result, Err(StartupError::InvalidCors(_))));
        assert_eq!(store.connects.load(Ordering::SeqCst), 1);
        assert_eq!(store.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn malformed_origin_fails_startup() {
        let store = Arc::new(MockDocumentStore::default());
        let settings = Settings {
            cors: CorsSettings {
                allowed_origins: vec!["http://bad host".to_string()],
                ..Default::default()
            },
            ..local_settings()
        };

        let result = Application::build(settings, store.clone()).await;

        assert!(matches!(
            result,
            Err(StartupError::InvalidCors(CorsError::InvalidOrigin(_)))
        ));
        assert_eq!(store.closes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn bind_failure_closes_the_opened_connection() {
        let taken = TcpListener::bind("127.0.0.1:0").unwrap();
        let store = Arc::new(MockDocumentStore::default());
        let settings = Settings {
            app_port: taken.local_addr().unwrap().port(),
            ..local_settings()
        };

        let result = Application::build(settings, store.clone()).await;

        assert!(matches!(result, Err(StartupError::Io(_))));
        assert_eq!(store.closes.load(Ordering::SeqCst), 1);
    }
}
