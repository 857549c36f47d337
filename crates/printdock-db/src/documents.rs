use async_trait::async_trait;
use printdock_core::{
    models::{Document, DocumentHistoryEntry, PrintJob, PrintJobResponse},
    AppError,
};
use sqlx::{PgPool, Postgres};
use std::collections::HashMap;
use uuid::Uuid;

/// Document persistence, behind a trait so the HTTP layer can be tested
/// against an in-memory double.
///
/// All reads and deletes are scoped by the owning user; another user's
/// document id resolves to nothing, the same as an unknown id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create_document(
        &self,
        user_id: Uuid,
        filename: &str,
        original_filename: &str,
        file_path: &str,
    ) -> Result<Document, AppError>;

    /// Get a document by id, scoped to its owner.
    async fn get_document(&self, user_id: Uuid, id: Uuid) -> Result<Option<Document>, AppError>;

    /// All documents owned by the user, newest upload first, each with its
    /// print jobs in creation order.
    async fn list_history(&self, user_id: Uuid) -> Result<Vec<DocumentHistoryEntry>, AppError>;

    /// Delete a document row (jobs cascade). Returns false when the id does
    /// not exist for this user.
    async fn delete_document(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;
}

/// Repository for uploaded documents.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for DocumentRepository {
    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "insert"))]
    async fn create_document(
        &self,
        user_id: Uuid,
        filename: &str,
        original_filename: &str,
        file_path: &str,
    ) -> Result<Document, AppError> {
        let document = sqlx::query_as::<Postgres, Document>(
            r#"
            INSERT INTO documents (user_id, filename, original_filename, file_path)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, filename, original_filename, file_path, uploaded_at
            "#,
        )
        .bind(user_id)
        .bind(filename)
        .bind(original_filename)
        .bind(file_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "select", db.record_id = %id))]
    async fn get_document(&self, user_id: Uuid, id: Uuid) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<Postgres, Document>(
            r#"
            SELECT id, user_id, filename, original_filename, file_path, uploaded_at
            FROM documents
            WHERE user_id = $1 AND id = $2
            "#,
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "select"))]
    async fn list_history(&self, user_id: Uuid) -> Result<Vec<DocumentHistoryEntry>, AppError> {
        let documents = sqlx::query_as::<Postgres, Document>(
            r#"
            SELECT id, user_id, filename, original_filename, file_path, uploaded_at
            FROM documents
            WHERE user_id = $1
            ORDER BY uploaded_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let document_ids: Vec<Uuid> = documents.iter().map(|d| d.id).collect();
        let jobs = sqlx::query_as::<Postgres, PrintJob>(
            r#"
            SELECT id, document_id, printer_name, status, printed_at, created_at
            FROM print_jobs
            WHERE document_id = ANY($1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(&document_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut jobs_by_document: HashMap<Uuid, Vec<PrintJobResponse>> = HashMap::new();
        for job in jobs {
            jobs_by_document
                .entry(job.document_id)
                .or_default()
                .push(job.into());
        }

        Ok(documents
            .into_iter()
            .map(|doc| DocumentHistoryEntry {
                print_jobs: jobs_by_document.remove(&doc.id).unwrap_or_default(),
                id: doc.id,
                original_filename: doc.original_filename,
                uploaded_at: doc.uploaded_at,
            })
            .collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "delete", db.record_id = %id))]
    async fn delete_document(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
