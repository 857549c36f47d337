//! Printdock Storage Library
//!
//! Storage abstraction for uploaded document files. The `Storage` trait keeps the
//! service layer independent of where bytes live; `LocalStorage` is the filesystem
//! backend that keeps files under the configured upload directory, flat, keyed by
//! the generated storage filename.
//!
//! Storage filenames are opaque server-generated names (`{uuid}.pdf`). They must
//! not contain path separators or `..`; validation is enforced at the trait
//! boundary by each backend.

pub mod local;
pub mod traits;

pub use local::LocalStorage;
pub use traits::{ByteStream, Storage, StorageError, StorageResult};
