//! Restodocks Admin Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use restodocks_app::context::{AppContext, connect_database};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod config;
mod errors;
mod establishments;
mod extensions;
mod healthcheck;
mod observability;
mod promo_codes;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod views;

/// Restodocks Admin Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so tracing output would be lost"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let db = match connect_database(&config.database.database_url).await {
        Ok(db) => db,
        Err(init_error) => {
            error!("failed to open record store: {init_error}");

            process::exit(1);
        }
    };

    let state = State::from_app_context(
        AppContext::from_db(db.clone(), config.auth.settings()),
        config.auth.secure_cookies(),
    );

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router::app_router(state)).await;

    db.close().await;

    info!("database pool closed");
}
