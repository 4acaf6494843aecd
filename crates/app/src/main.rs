use std::sync::Arc;

use store::{DatabaseStore, DynStorage, MemoryStore};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "satang={level},server={level},store={level}",
            level = settings.app.level
        ))
        .init();

    let (storage, durable_configured) = open_storage(settings.database.as_ref()).await;

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    server::run_with_listener(storage, durable_configured, listener).await?;
    Ok(())
}

/// Resolves the configured backend.
///
/// A durable backend that cannot be reached falls back to the volatile
/// store instead of failing startup, so the reporting UI always has a
/// data source.
async fn open_storage(database: Option<&settings::Database>) -> (DynStorage, bool) {
    match database {
        Some(settings::Database::Sqlite { path }) => {
            let url = format!("sqlite:{path}?mode=rwc");
            match DatabaseStore::connect(&url).await {
                Ok(store) => (Arc::new(store) as DynStorage, true),
                Err(err) => {
                    tracing::warn!(
                        "failed to open database store, falling back to in-memory: {err}"
                    );
                    (Arc::new(MemoryStore::new()) as DynStorage, true)
                }
            }
        }
        Some(settings::Database::Memory) | None => {
            (Arc::new(MemoryStore::new()) as DynStorage, false)
        }
    }
}
