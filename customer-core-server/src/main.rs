//! Customer record server
//!
//! Serves read views of the customer record and non-persisting bank patches.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p customer-core-server
//! ```
//!
//! # Environment Variables
//!
//! - `APP_HOST`: Server host (default: 0.0.0.0)
//! - `APP_PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info,customer_core=debug,tower_http=debug)

use std::sync::Arc;

use customer_core_file::FileRepositories;
use customer_core_server::api::routes::create_router;
use customer_core_server::{telemetry, AppConfig, AppState};
use customer_core_service::CustomerServiceImpl;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "Invalid configuration, falling back to defaults");
        AppConfig::default()
    });

    let repositories = FileRepositories::at_fixed_location().create_customer_repositories();
    info!(
        path = %repositories.customer_repository.path().display(),
        "Serving customer record"
    );

    let service = CustomerServiceImpl::new(repositories.customer_repository);
    let state = AppState::new(Arc::new(service));
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;

    info!("Starting server on {}", address);
    info!("  GET   /getDetails/person/{{personId}}/request/{{requestType}}");
    info!("  PATCH /updateDetails/bank");
    info!("  GET   /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
