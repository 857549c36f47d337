use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, Json};
use printdock_core::models::DocumentHistoryEntry;
use printdock_db::DocumentStore;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/documents/history",
    tag = "documents",
    responses(
        (status = 200, description = "Caller's documents, newest first", body = [DocumentHistoryEntry]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn document_history(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
) -> Result<Json<Vec<DocumentHistoryEntry>>, HttpAppError> {
    let history = state.documents.list_history(current_user.0.id).await?;
    Ok(Json(history))
}
