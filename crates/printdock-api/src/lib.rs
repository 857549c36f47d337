//! Printdock API
//!
//! HTTP surface of the service: axum handlers for document upload, history,
//! download, deletion and print submission, plus printer listing/status and
//! registration/login. Wiring (database pool, storage, printer gateway,
//! routes, server) lives under `setup`.

pub mod api_doc;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
