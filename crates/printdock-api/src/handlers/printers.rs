use crate::state::AppState;
use axum::{extract::State, Json};
use printdock_core::models::{PrinterDevice, PrinterStatusResponse, SubsystemStatus};
use printdock_printer::PrinterGateway;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/printers/",
    tag = "printers",
    responses(
        (status = 200, description = "Registered printers (empty when disconnected)", body = [PrinterDevice])
    )
)]
pub async fn list_printers(State(state): State<Arc<AppState>>) -> Json<Vec<PrinterDevice>> {
    Json(state.printer.list_devices().await)
}

#[utoipa::path(
    get,
    path = "/printers/status",
    tag = "printers",
    responses(
        (status = 200, description = "Printing subsystem connectivity", body = PrinterStatusResponse)
    )
)]
pub async fn printer_status(State(state): State<Arc<AppState>>) -> Json<PrinterStatusResponse> {
    if state.printer.connect().await {
        let printers_available = state.printer.list_devices().await.len();
        Json(PrinterStatusResponse {
            status: SubsystemStatus::Connected,
            printers_available,
        })
    } else {
        Json(PrinterStatusResponse {
            status: SubsystemStatus::Disconnected,
            printers_available: 0,
        })
    }
}
