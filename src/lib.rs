pub mod advisor;
pub mod api;
pub mod config;
pub mod db;
pub mod models;

use tracing_subscriber::EnvFilter;

/// Process entry point: logging, database, symptom sync, HTTP server until
/// Ctrl-C.
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build tokio runtime");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(serve()) {
        tracing::error!(error = %e, "{} stopped with an error", config::APP_NAME);
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), String> {
    let db_path = config::database_path();
    tracing::info!(path = %db_path.display(), "Opening advisor database");

    {
        let conn = db::sqlite::open_database(&db_path).map_err(|e| e.to_string())?;
        advisor::vocabulary::sync_symptoms(&conn).map_err(|e| e.to_string())?;
    }

    let ctx = api::ApiContext::new(api::DatabaseHandle::File(db_path));
    let mut server = api::start_advisor_api_server(ctx, config::bind_addr()).await?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;
    server.shutdown();
    Ok(())
}
