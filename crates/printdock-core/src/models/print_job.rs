use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Print job status.
///
/// `Pending` is the create-time default and is overwritten synchronously within
/// the submitting request, so clients only ever observe `printed` or `failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "print_status", rename_all = "lowercase")
)]
pub enum PrintStatus {
    Pending,
    Printed,
    Failed,
}

impl PrintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrintStatus::Pending => "pending",
            PrintStatus::Printed => "printed",
            PrintStatus::Failed => "failed",
        }
    }
}

/// One synchronous attempt to send one document to one printer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PrintJob {
    pub id: Uuid,
    pub document_id: Uuid,
    pub printer_name: String,
    pub status: PrintStatus,
    pub printed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrintJobResponse {
    pub id: Uuid,
    pub printer_name: String,
    pub status: PrintStatus,
    pub printed_at: Option<DateTime<Utc>>,
}

impl From<PrintJob> for PrintJobResponse {
    fn from(job: PrintJob) -> Self {
        PrintJobResponse {
            id: job.id,
            printer_name: job.printer_name,
            status: job.status,
            printed_at: job.printed_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrintSubmitResponse {
    pub message: String,
    pub status: PrintStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PrintStatus::Printed).unwrap(),
            "\"printed\""
        );
        assert_eq!(
            serde_json::to_string(&PrintStatus::Failed).unwrap(),
            "\"failed\""
        );
        assert_eq!(PrintStatus::Pending.as_str(), "pending");
    }

    #[test]
    fn test_print_job_response_from_job() {
        let now = Utc::now();
        let job = PrintJob {
            id: Uuid::new_v4(),
            document_id: Uuid::new_v4(),
            printer_name: "HP_LaserJet".to_string(),
            status: PrintStatus::Printed,
            printed_at: Some(now),
            created_at: now,
        };

        let response = PrintJobResponse::from(job.clone());
        assert_eq!(response.id, job.id);
        assert_eq!(response.printer_name, "HP_LaserJet");
        assert_eq!(response.status, PrintStatus::Printed);
        assert_eq!(response.printed_at, Some(now));
    }

    #[test]
    fn test_print_job_response_failed_has_null_printed_at() {
        let job = PrintJob {
            id: Uuid::new_v4(),
            document_id: Uuid::new_v4(),
            printer_name: "HP_LaserJet".to_string(),
            status: PrintStatus::Failed,
            printed_at: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(PrintJobResponse::from(job)).unwrap();
        assert_eq!(json["status"], "failed");
        assert!(json["printed_at"].is_null());
    }
}
