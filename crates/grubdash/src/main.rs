//! # GrubDash server
//!
//! Parses [`Arguments`], loads the seed collections, starts the actors and serves the API
//! until Ctrl-C.

use clap::Parser;
use grubdash::api::{self, AppState};
use grubdash::config::{Arguments, SeedData};
use grubdash::lifecycle::GrubSystem;
use resource_actor::tracing::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Arguments::parse();
    setup_tracing(&args.log_filter);
    info!("running grubdash with validated arguments:\n{}", args);

    let seed = SeedData::load(args.dishes_file.as_deref(), args.orders_file.as_deref())
        .map_err(|e| {
            error!(error = %e, "Failed to load seed data");
            e.to_string()
        })?;

    let system = GrubSystem::new(seed, args.channel_capacity);
    let app = api::router(AppState {
        dishes: system.dish_client.clone(),
        orders: system.order_client.clone(),
    });

    let listener = tokio::net::TcpListener::bind(args.bind_address)
        .await
        .map_err(|e| {
            error!(error = %e, address = %args.bind_address, "Failed to bind");
            e.to_string()
        })?;
    info!(address = %args.bind_address, "Listening");

    // The router (and its client clones) is dropped when serve returns.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, shutting down");
}
