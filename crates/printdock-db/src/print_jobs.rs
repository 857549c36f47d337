use async_trait::async_trait;
use chrono::{DateTime, Utc};
use printdock_core::{
    models::{PrintJob, PrintStatus},
    AppError,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Print job persistence, behind a trait so the HTTP layer can be tested
/// against an in-memory double.
#[async_trait]
pub trait PrintJobStore: Send + Sync {
    /// Create a job in the `pending` state. The caller records the outcome
    /// with `record_result` within the same request.
    async fn create_job(&self, document_id: Uuid, printer_name: &str)
        -> Result<PrintJob, AppError>;

    /// Record the outcome of the synchronous print attempt. Called exactly
    /// once per job; `printed_at` is set only on success.
    async fn record_result(
        &self,
        id: Uuid,
        status: PrintStatus,
        printed_at: Option<DateTime<Utc>>,
    ) -> Result<PrintJob, AppError>;
}

/// Repository for print jobs
#[derive(Clone)]
pub struct PrintJobRepository {
    pool: PgPool,
}

impl PrintJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrintJobStore for PrintJobRepository {
    #[tracing::instrument(skip(self), fields(db.table = "print_jobs", db.operation = "insert"))]
    async fn create_job(
        &self,
        document_id: Uuid,
        printer_name: &str,
    ) -> Result<PrintJob, AppError> {
        let job = sqlx::query_as::<Postgres, PrintJob>(
            r#"
            INSERT INTO print_jobs (document_id, printer_name)
            VALUES ($1, $2)
            RETURNING id, document_id, printer_name, status, printed_at, created_at
            "#,
        )
        .bind(document_id)
        .bind(printer_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    #[tracing::instrument(skip(self), fields(db.table = "print_jobs", db.operation = "update", db.record_id = %id))]
    async fn record_result(
        &self,
        id: Uuid,
        status: PrintStatus,
        printed_at: Option<DateTime<Utc>>,
    ) -> Result<PrintJob, AppError> {
        let job = sqlx::query_as::<Postgres, PrintJob>(
            r#"
            UPDATE print_jobs
            SET status = $2, printed_at = $3
            WHERE id = $1
            RETURNING id, document_id, printer_name, status, printed_at, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(printed_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }
}
