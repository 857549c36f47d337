pub mod auth;
pub mod document_delete;
pub mod document_download;
pub mod document_history;
pub mod document_print;
pub mod document_upload;
pub mod health;
pub mod printers;
