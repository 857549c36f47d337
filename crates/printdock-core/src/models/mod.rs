pub mod document;
pub mod print_job;
pub mod printer;
pub mod user;

pub use document::{
    has_pdf_extension, sanitize_original_filename, Document, DocumentHistoryEntry,
    DocumentUploadResponse,
};
pub use print_job::{PrintJob, PrintJobResponse, PrintStatus, PrintSubmitResponse};
pub use printer::{PrinterDevice, PrinterState, PrinterStatusResponse, SubsystemStatus};
pub use user::{LoginResponse, RegisterResponse, User};

use serde::Serialize;
use utoipa::ToSchema;

/// Generic `{message}` response body (e.g. for deletes).
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
