use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::print_job::PrintJobResponse;

/// Uploaded PDF document.
///
/// `filename` is the generated storage name (`{uuid}.pdf`, unique across all
/// documents); `original_filename` is the user-supplied name, kept for display
/// and downloads only.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Document {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentUploadResponse {
    pub id: Uuid,
    pub filename: String,
    pub message: String,
}

/// One entry of `GET /documents/history`: a document with its print jobs nested
/// in creation order.
#[derive(Debug, Serialize, ToSchema)]
pub struct DocumentHistoryEntry {
    pub id: Uuid,
    pub original_filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub print_jobs: Vec<PrintJobResponse>,
}

/// True if `filename` names a PDF (case-insensitive `.pdf` suffix).
///
/// Upload validation runs before any storage or database mutation.
pub fn has_pdf_extension(filename: &str) -> bool {
    let lower = filename.to_ascii_lowercase();
    lower.ends_with(".pdf") && lower.len() > ".pdf".len()
}

/// Strip characters from a user-supplied filename that would break a
/// `Content-Disposition` header or a log line. Path separators are dropped so a
/// crafted name cannot suggest a location on the caller's machine.
pub fn sanitize_original_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '"' | '\\' | '/'))
        .collect()
}
