use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use printdock_core::{models::MessageResponse, AppError};
use printdock_db::DocumentStore;
use printdock_storage::Storage;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/documents/{id}",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document deleted", body = MessageResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, current_user), fields(user_id = %current_user.0.id, document_id = %id))]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    let document = state
        .documents
        .get_document(current_user.0.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    // File first, then row. A missing file is fine (already the degraded
    // state downloads treat as 404); a real removal failure aborts before the
    // row disappears.
    state.storage.remove(&document.filename).await?;

    let deleted = state
        .documents
        .delete_document(current_user.0.id, id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound("Document not found".to_string()).into());
    }

    tracing::info!(document_id = %id, "Document deleted");
    Ok(Json(MessageResponse::new("Document deleted successfully")))
}
