use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use historial_core::{database_path_from_env_value, CoreConfig, PatientDirectoryService};

/// Main entry point for the historial service
///
/// Opens the patient store and serves the REST API on port 3000 (configurable via
/// `HISTORIAL_REST_ADDR`).
///
/// # Environment Variables
/// - `HISTORIAL_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `HISTORIAL_DATABASE_PATH`: SQLite database file (default: "historial.db", ":memory:" for
///   an in-memory store)
/// - `RUST_LOG`: tracing filter, added to the default `info` directives for the historial crates
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the store cannot be opened or migrated, or
/// - the server address cannot be bound or the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("historial_run=info".parse()?)
                .add_directive("historial_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = api_rest::rest_addr_from_env_value(std::env::var("HISTORIAL_REST_ADDR").ok());
    let cfg = CoreConfig::new(database_path_from_env_value(
        std::env::var("HISTORIAL_DATABASE_PATH").ok(),
    ));

    tracing::info!(
        "++ Starting historial REST on {} (database: {})",
        rest_addr,
        cfg.database_path().display()
    );

    let store = cfg.open_store()?;
    let directory = PatientDirectoryService::new(Arc::new(store));

    api_rest::serve(&rest_addr, directory).await
}
