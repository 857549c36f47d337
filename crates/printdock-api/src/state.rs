//! Application state shared by all handlers.

use printdock_core::Config;
use printdock_db::{DocumentStore, PrintJobStore, UserStore};
use printdock_printer::PrinterGateway;
use printdock_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

/// Everything a handler needs, injected at construction time. The stores, the
/// printer gateway and the storage backend all sit behind trait objects so
/// tests can swap in doubles.
pub struct AppState {
    pub config: Config,
    pub db_pool: PgPool,
    pub users: Arc<dyn UserStore>,
    pub documents: Arc<dyn DocumentStore>,
    pub print_jobs: Arc<dyn PrintJobStore>,
    pub storage: Arc<dyn Storage>,
    pub printer: Arc<dyn PrinterGateway>,
}
