use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use tokio::sync::RwLock;

use super::{DatabaseError, DocumentStore};
use crate::configuration::DatabaseSettings;

pub struct MongoStore {
    settings: DatabaseSettings,
    app_name: String,
    client: RwLock<Option<Client>>,
}

impl MongoStore {
    pub fn new(settings: DatabaseSettings, app_name: impl Into<String>) -> Self {
        Self {
            settings,
            app_name: app_name.into(),
            client: RwLock::new(None),
        }
    }

    async fn ping_with(&self, client: &Client) -> Result<(), DatabaseError> {
        client
            .database(&self.settings.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    #[tracing::instrument(
        name = "Connect to MongoDB",
        skip(self),
        fields(database = %self.settings.database_name)
    )]
    async fn connect(&self) -> Result<(), DatabaseError> {
        let mut guard = self.client.write().await;
        if guard.is_some() {
            tracing::warn!("MongoDB client already connected");
            return Ok(());
        }

        let mut options = ClientOptions::parse(self.settings.url.as_str()).await?;
        options.app_name = Some(self.app_name.clone());
        options.server_selection_timeout =
            Some(Duration::from_secs(self.settings.connect_timeout_secs));

        let client = Client::with_options(options)?;
        // the driver connects lazily; fail startup now rather than on the first request
        self.ping_with(&client).await?;

        tracing::info!("Connected to MongoDB");
        *guard = Some(client);
        Ok(())
    }

    #[tracing::instrument(name = "Close MongoDB connection", skip(self))]
    async fn close(&self) -> Result<(), DatabaseError> {
        let client = self.client.write().await.take();
        match client {
            Some(client) => {
                client.shutdown().await;
                tracing::info!("MongoDB connection closed");
            }
            None => tracing::warn!("MongoDB close requested but no connection is open"),
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        // Client is a cheap handle; don't hold the lock across the round trip
        let client = self
            .client
            .read()
            .await
            .clone()
            .ok_or(DatabaseError::NotConnected)?;
        self.ping_with(&client).await
    }
}
