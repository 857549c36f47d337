//! OpenAPI document assembly.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "printdock",
        description = "PDF upload and printing service"
    ),
    paths(
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::document_upload::upload_document,
        crate::handlers::document_history::document_history,
        crate::handlers::document_download::download_document,
        crate::handlers::document_print::print_document,
        crate::handlers::document_delete::delete_document,
        crate::handlers::printers::list_printers,
        crate::handlers::printers::printer_status,
    ),
    components(schemas(
        crate::error::ErrorResponse,
        crate::handlers::auth::RegisterRequest,
        crate::handlers::auth::LoginRequest,
        crate::handlers::document_print::PrintForm,
        printdock_core::models::DocumentUploadResponse,
        printdock_core::models::DocumentHistoryEntry,
        printdock_core::models::MessageResponse,
        printdock_core::models::PrintJobResponse,
        printdock_core::models::PrintStatus,
        printdock_core::models::PrintSubmitResponse,
        printdock_core::models::PrinterDevice,
        printdock_core::models::PrinterState,
        printdock_core::models::PrinterStatusResponse,
        printdock_core::models::SubsystemStatus,
        printdock_core::models::RegisterResponse,
        printdock_core::models::LoginResponse,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "documents", description = "Document upload, history, download, printing"),
        (name = "printers", description = "Printer listing and subsystem status")
    )
)]
pub struct ApiDoc;
