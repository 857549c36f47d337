use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use printdock_core::{
    models::{has_pdf_extension, sanitize_original_filename, DocumentUploadResponse},
    AppError,
};
use printdock_db::DocumentStore;
use printdock_storage::Storage;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/documents/upload",
    tag = "documents",
    responses(
        (status = 200, description = "Document uploaded", body = DocumentUploadResponse),
        (status = 400, description = "Missing file or not a PDF", body = ErrorResponse),
        (status = 500, description = "Storage or database failure", body = ErrorResponse)
    )
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<DocumentUploadResponse>, HttpAppError> {
    let (original_filename, data) = read_file_field(&mut multipart).await?;

    // Validation happens before any storage or row mutation
    if !has_pdf_extension(&original_filename) {
        return Err(AppError::InvalidInput("Only PDF files are allowed".to_string()).into());
    }
    let original_filename = sanitize_original_filename(&original_filename);

    // Random storage name; collisions are negligible and the column is UNIQUE
    let storage_name = format!("{}.pdf", Uuid::new_v4());
    let path = state.storage.store(&storage_name, &data).await?;

    let document = match state
        .documents
        .create_document(
            current_user.0.id,
            &storage_name,
            &original_filename,
            &path.to_string_lossy(),
        )
        .await
    {
        Ok(document) => document,
        Err(e) => {
            // The file was written but the row was not; clean up the orphan
            let storage = state.storage.clone();
            let name = storage_name.clone();
            tokio::spawn(async move {
                if let Err(cleanup_err) = storage.remove(&name).await {
                    tracing::debug!(
                        filename = %name,
                        error = %cleanup_err,
                        "Failed to clean up stored file after database error"
                    );
                }
            });
            return Err(e.into());
        }
    };

    tracing::info!(
        document_id = %document.id,
        user_id = %document.user_id,
        size_bytes = data.len(),
        "Document uploaded"
    );

    Ok(Json(DocumentUploadResponse {
        id: document.id,
        filename: document.original_filename,
        message: "Document uploaded successfully".to_string(),
    }))
}

/// Pull the `file` part out of the multipart body.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(map_multipart_error)?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput("Missing filename".to_string()))?;

        let data = field.bytes().await.map_err(map_multipart_error)?;

        return Ok((filename, data));
    }

    Err(AppError::InvalidInput("Missing file field".to_string()).into())
}

/// A body that trips the request size limit surfaces here as a read error with
/// a 413 status; everything else is a malformed body.
fn map_multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file exceeds the size limit".to_string())
    } else {
        AppError::InvalidInput(format!("Invalid multipart body: {}", e))
    }
}
