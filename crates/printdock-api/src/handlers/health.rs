//! Health probe.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use printdock_printer::PrinterGateway;
use std::sync::Arc;
use std::time::Duration;

/// Reports whether the database answers and whether the print subsystem is
/// reachable. Printer trouble degrades the report but never fails it; only a
/// dead database returns 503.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let mut healthy = true;

    let database = match tokio::time::timeout(
        TIMEOUT,
        sqlx::query("SELECT 1").execute(&state.db_pool),
    )
    .await
    {
        Ok(Ok(_)) => "healthy".to_string(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database health check failed");
            healthy = false;
            format!("unhealthy: {e}")
        }
        Err(_) => {
            tracing::error!("Database health check timed out");
            healthy = false;
            "timeout".to_string()
        }
    };

    let printing = match tokio::time::timeout(TIMEOUT, state.printer.connect()).await {
        Ok(true) => "connected",
        Ok(false) => "disconnected",
        Err(_) => "timeout",
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": if healthy { "healthy" } else { "unhealthy" },
            "database": database,
            "printing": printing,
        })),
    )
}
