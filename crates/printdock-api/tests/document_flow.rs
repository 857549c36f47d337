//! Handler-level tests for the document lifecycle, run against in-memory
//! doubles: ownership scoping, the no-job-without-available-printer rule,
//! upload validation ordering, and delete idempotency.

mod helpers;

use axum::body::Body;
use axum::extract::{FromRequest, Multipart, Path, State};
use axum::http::{header, Request};
use axum::Form;
use helpers::{seed_document, test_app, StubGateway, PRINTER_NAME};
use printdock_api::auth::CurrentUser;
use printdock_api::error::HttpAppError;
use printdock_api::handlers::{
    document_delete, document_download, document_history, document_print, document_upload,
};
use printdock_core::models::PrintStatus;
use printdock_core::{AppError, ErrorMetadata};
use uuid::Uuid;

fn expect_not_found(result: Result<impl Sized, HttpAppError>) -> String {
    match result {
        Err(HttpAppError(err @ AppError::NotFound(_))) => {
            assert_eq!(err.http_status_code(), 404);
            err.client_message()
        }
        Err(HttpAppError(other)) => panic!("expected NotFound, got {:?}", other),
        Ok(_) => panic!("expected NotFound, got success"),
    }
}

async fn multipart_upload(filename: &str, data: &[u8]) -> Multipart {
    let boundary = "----printdock-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    Multipart::from_request(request, &()).await.unwrap()
}

#[tokio::test]
async fn test_cross_user_access_indistinguishable_from_nonexistent() {
    let app = test_app(StubGateway::new(true, true));
    let owner = app.users.seed("owner@example.com");
    let other = app.users.seed("other@example.com");
    let document = seed_document(&app, &owner).await;

    // Another user's id and a random id produce the same 404
    let foreign = document_download::download_document(
        State(app.state.clone()),
        CurrentUser(other.clone()),
        Path(document.id),
    )
    .await;
    let nonexistent = document_download::download_document(
        State(app.state.clone()),
        CurrentUser(other.clone()),
        Path(Uuid::new_v4()),
    )
    .await;
    assert_eq!(expect_not_found(foreign), expect_not_found(nonexistent));

    // Same property on delete, and the owner's data is untouched
    let foreign_delete = document_delete::delete_document(
        State(app.state.clone()),
        CurrentUser(other),
        Path(document.id),
    )
    .await;
    expect_not_found(foreign_delete);
    assert_eq!(app.db.documents().len(), 1);
    assert!(app.storage.contains(&document.filename));
}

#[tokio::test]
async fn test_unavailable_printer_creates_no_job() {
    let app = test_app(StubGateway::new(false, true));
    let user = app.users.seed("user@example.com");
    let document = seed_document(&app, &user).await;

    let result = document_print::print_document(
        State(app.state.clone()),
        CurrentUser(user),
        Path(document.id),
        Form(document_print::PrintForm {
            printer_name: PRINTER_NAME.to_string(),
        }),
    )
    .await;

    match result {
        Err(HttpAppError(err @ AppError::PrinterUnavailable(_))) => {
            assert_eq!(err.http_status_code(), 400);
            assert_eq!(err.client_message(), "Printer not available");
        }
        other => panic!("expected PrinterUnavailable, got {:?}", other.map(|_| ())),
    }

    assert!(app.db.jobs().is_empty());
    assert!(app.printer.submitted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_submission_records_failed_job() {
    let app = test_app(StubGateway::new(true, false));
    let user = app.users.seed("user@example.com");
    let document = seed_document(&app, &user).await;

    let response = document_print::print_document(
        State(app.state.clone()),
        CurrentUser(user),
        Path(document.id),
        Form(document_print::PrintForm {
            printer_name: PRINTER_NAME.to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.0.message, "Print job failed");
    assert_eq!(response.0.status, PrintStatus::Failed);

    let jobs = app.db.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, PrintStatus::Failed);
    assert!(jobs[0].printed_at.is_none());
}

#[tokio::test]
async fn test_successful_print_records_printed_job() {
    let app = test_app(StubGateway::new(true, true));
    let user = app.users.seed("user@example.com");
    let document = seed_document(&app, &user).await;

    let response = document_print::print_document(
        State(app.state.clone()),
        CurrentUser(user.clone()),
        Path(document.id),
        Form(document_print::PrintForm {
            printer_name: PRINTER_NAME.to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(response.0.message, "Print job submitted");
    assert_eq!(response.0.status, PrintStatus::Printed);

    let jobs = app.db.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, PrintStatus::Printed);
    assert!(jobs[0].printed_at.is_some());
    assert_eq!(
        app.printer.submitted.lock().unwrap().as_slice(),
        [PRINTER_NAME.to_string()]
    );

    // The job shows up in history under its document
    let history = document_history::document_history(State(app.state.clone()), CurrentUser(user))
        .await
        .unwrap();
    assert_eq!(history.0.len(), 1);
    assert_eq!(history.0[0].print_jobs.len(), 1);
    assert_eq!(history.0[0].print_jobs[0].status, PrintStatus::Printed);
}

#[tokio::test]
async fn test_delete_twice_yields_not_found() {
    let app = test_app(StubGateway::new(true, true));
    let user = app.users.seed("user@example.com");
    let document = seed_document(&app, &user).await;

    let response = document_delete::delete_document(
        State(app.state.clone()),
        CurrentUser(user.clone()),
        Path(document.id),
    )
    .await
    .unwrap();
    assert_eq!(response.0.message, "Document deleted successfully");
    assert!(!app.storage.contains(&document.filename));

    let second = document_delete::delete_document(
        State(app.state.clone()),
        CurrentUser(user),
        Path(document.id),
    )
    .await;
    expect_not_found(second);
}

#[tokio::test]
async fn test_upload_rejects_non_pdf_before_any_mutation() {
    let app = test_app(StubGateway::new(true, true));
    let user = app.users.seed("user@example.com");

    let multipart = multipart_upload("notes.txt", b"plain text").await;
    let result = document_upload::upload_document(
        State(app.state.clone()),
        CurrentUser(user),
        multipart,
    )
    .await;

    match result {
        Err(HttpAppError(err @ AppError::InvalidInput(_))) => {
            assert_eq!(err.client_message(), "Only PDF files are allowed");
        }
        other => panic!("expected InvalidInput, got {:?}", other.map(|_| ())),
    }

    // Rejection happened before anything was written
    assert_eq!(app.storage.store_calls(), 0);
    assert!(app.db.documents().is_empty());
}

#[tokio::test]
async fn test_upload_stores_file_and_row() {
    let app = test_app(StubGateway::new(true, true));
    let user = app.users.seed("user@example.com");

    let multipart = multipart_upload("Quarterly Report.pdf", b"%PDF-1.4 content").await;
    let response = document_upload::upload_document(
        State(app.state.clone()),
        CurrentUser(user.clone()),
        multipart,
    )
    .await
    .unwrap();

    assert_eq!(response.0.message, "Document uploaded successfully");
    assert_eq!(response.0.filename, "Quarterly Report.pdf");

    let documents = app.db.documents();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].user_id, user.id);
    assert!(documents[0].filename.ends_with(".pdf"));
    assert_eq!(app.storage.store_calls(), 1);
    assert!(app.storage.contains(&documents[0].filename));
}
