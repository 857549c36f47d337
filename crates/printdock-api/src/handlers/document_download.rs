use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
};
use printdock_core::AppError;
use printdock_db::DocumentStore;
use printdock_storage::{Storage, StorageError};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/documents/download/{id}",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "PDF file", content_type = "application/pdf"),
        (status = 404, description = "Document or backing file not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, current_user), fields(user_id = %current_user.0.id, document_id = %id))]
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response<Body>, HttpAppError> {
    let document = state
        .documents
        .get_document(current_user.0.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    // The row may outlive the file (e.g. a delete interrupted between file and
    // row removal); that is still a 404 to the caller.
    let stream = match state.storage.read_stream(&document.filename).await {
        Ok(stream) => stream,
        Err(StorageError::NotFound(_)) => {
            return Err(AppError::NotFound("File not found".to_string()).into());
        }
        Err(e) => return Err(e.into()),
    };

    let content_disposition = format!("attachment; filename=\"{}\"", document.original_filename);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_DISPOSITION, content_disposition.as_str())
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
