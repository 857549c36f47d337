//! Application wiring: database, storage, printer gateway, routes, server.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::Router;
use printdock_core::Config;
use printdock_db::{
    DocumentRepository, DocumentStore, PrintJobRepository, PrintJobStore, UserRepository, UserStore,
};
use printdock_printer::create_gateway;
use printdock_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Build the full application: pool + migrations, upload storage, printer
/// gateway, repositories, and the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let pool = database::setup_database(&config).await?;

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(&config.upload_dir)
            .await
            .context("Failed to initialize upload storage")?,
    );

    let printer = create_gateway(&config);

    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.clone()));
    let documents: Arc<dyn DocumentStore> = Arc::new(DocumentRepository::new(pool.clone()));
    let print_jobs: Arc<dyn PrintJobStore> = Arc::new(PrintJobRepository::new(pool.clone()));

    let state = Arc::new(AppState {
        users,
        documents,
        print_jobs,
        db_pool: pool,
        storage,
        printer,
        config,
    });

    let router = routes::setup_routes(&state)?;

    Ok((state, router))
}
