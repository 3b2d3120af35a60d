use forum_data::shared::config::DatabaseConfig;
use forum_data::shared::db::TableSchema;
use forum_data::topic::adapter::outgoing::{TopicQueryPostgres, TopicSchemaPostgres};
use forum_data::topic::application::ports::outgoing::TopicQuery;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Ensures the forum tables exist in the configured database.
#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting forum data bootstrap...");

    let config = DatabaseConfig::from_env()?;
    let conn = config.connect().await?;
    let db_arc = Arc::new(conn);

    let topics_schema = TopicSchemaPostgres::new(Arc::clone(&db_arc));
    topics_schema.initialize().await?;

    let topics = TopicQueryPostgres::new(Arc::clone(&db_arc))
        .get_all()
        .await?;

    info!(
        "Table {} holds {} topics",
        topics_schema.table_name(),
        topics.len()
    );

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error bootstrapping forum data: {e}");
        std::process::exit(1);
    }
}
