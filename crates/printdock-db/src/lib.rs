//! Printdock Database Library
//!
//! sqlx/Postgres repositories for the three entities: users, documents, and
//! print jobs. Every document and print-job query is scoped by the owning
//! user, so a foreign id behaves exactly like a nonexistent one.

pub mod documents;
pub mod print_jobs;
pub mod users;

pub use documents::{DocumentRepository, DocumentStore};
pub use print_jobs::{PrintJobRepository, PrintJobStore};
pub use users::{UserRepository, UserStore};
