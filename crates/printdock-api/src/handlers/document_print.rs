use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Form, Json,
};
use chrono::Utc;
use printdock_core::{
    models::{PrintStatus, PrintSubmitResponse},
    AppError,
};
use printdock_db::{DocumentStore, PrintJobStore};
use printdock_printer::PrinterGateway;
use printdock_storage::Storage;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PrintForm {
    pub printer_name: String,
}

#[utoipa::path(
    post,
    path = "/documents/print/{id}",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    request_body(content = PrintForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Print attempt recorded", body = PrintSubmitResponse),
        (status = 400, description = "Printer not available", body = ErrorResponse),
        (status = 404, description = "Document or backing file not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, current_user, form), fields(user_id = %current_user.0.id, document_id = %id))]
pub async fn print_document(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
    Form(form): Form<PrintForm>,
) -> Result<Json<PrintSubmitResponse>, HttpAppError> {
    let document = state
        .documents
        .get_document(current_user.0.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    if !state.storage.exists(&document.filename).await? {
        return Err(AppError::NotFound("File not found".to_string()).into());
    }

    // No job row is created for an unavailable printer. The device list is
    // re-fetched here, so a device vanishing between this check and the
    // submission below simply records the job as failed.
    if !state.printer.is_available(&form.printer_name).await {
        return Err(AppError::PrinterUnavailable("Printer not available".to_string()).into());
    }

    let job = state
        .print_jobs
        .create_job(document.id, &form.printer_name)
        .await?;

    let success = state
        .printer
        .submit(
            &form.printer_name,
            std::path::Path::new(&document.file_path),
            &document.original_filename,
        )
        .await;

    let (status, printed_at) = if success {
        (PrintStatus::Printed, Some(Utc::now()))
    } else {
        (PrintStatus::Failed, None)
    };
    let job = state.print_jobs.record_result(job.id, status, printed_at).await?;

    tracing::info!(
        job_id = %job.id,
        printer = %job.printer_name,
        status = job.status.as_str(),
        "Print attempt recorded"
    );

    Ok(Json(PrintSubmitResponse {
        message: if success {
            "Print job submitted".to_string()
        } else {
            "Print job failed".to_string()
        },
        status: job.status,
    }))
}
