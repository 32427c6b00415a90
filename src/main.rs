use anyhow::Context;
use exam_paper_api::configuration::get_configuration;
use exam_paper_api::db::{DocumentStore, MongoStore};
use exam_paper_api::startup::Application;
use exam_paper_api::telemetry::{get_subscriber, init_subscriber};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("exam-paper-api".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().context("Failed to read configuration.")?;

    tracing::info!(
        app = %settings.app_name,
        description = %settings.app_description,
        db_name = %settings.database.database_name,
        "Connecting to MongoDB"
    );

    let store: Arc<dyn DocumentStore> = Arc::new(MongoStore::new(
        settings.database.clone(),
        settings.app_name.clone(),
    ));
    let app_name = settings.app_name.clone();

    let application = Application::build(settings, store)
        .await
        .context("Failed to start application.")?;
    tracing::info!(port = application.port(), "🚀 {} started successfully!", app_name);

    application.run_until_stopped().await?;

    Ok(())
}
