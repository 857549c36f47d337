use serde::Serialize;
use utoipa::ToSchema;

/// Normalized printer state, derived from the IPP `printer-state` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrinterState {
    Idle,
    Printing,
    Stopped,
    Unknown,
}

impl PrinterState {
    /// Map the IPP `printer-state` enum: 3 idle, 4 processing, 5 stopped.
    /// Any other code is reported as unknown rather than rejected.
    pub fn from_ipp_code(code: i32) -> Self {
        match code {
            3 => PrinterState::Idle,
            4 => PrinterState::Printing,
            5 => PrinterState::Stopped,
            _ => PrinterState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrinterState::Idle => "idle",
            PrinterState::Printing => "printing",
            PrinterState::Stopped => "stopped",
            PrinterState::Unknown => "unknown",
        }
    }
}

/// A printer registered with the printing subsystem.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PrinterDevice {
    pub name: String,
    pub info: String,
    pub location: String,
    pub state: PrinterState,
}

/// Aggregate connectivity of the printing subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubsystemStatus {
    Connected,
    Disconnected,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrinterStatusResponse {
    pub status: SubsystemStatus,
    pub printers_available: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ipp_code() {
        assert_eq!(PrinterState::from_ipp_code(3), PrinterState::Idle);
        assert_eq!(PrinterState::from_ipp_code(4), PrinterState::Printing);
        assert_eq!(PrinterState::from_ipp_code(5), PrinterState::Stopped);
        assert_eq!(PrinterState::from_ipp_code(0), PrinterState::Unknown);
        assert_eq!(PrinterState::from_ipp_code(6), PrinterState::Unknown);
        assert_eq!(PrinterState::from_ipp_code(-1), PrinterState::Unknown);
    }

    #[test]
    fn test_printer_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PrinterState::Idle).unwrap(),
            "\"idle\""
        );
        assert_eq!(PrinterState::Stopped.as_str(), "stopped");
    }

    #[test]
    fn test_status_response_shape() {
        let connected = serde_json::to_value(PrinterStatusResponse {
            status: SubsystemStatus::Connected,
            printers_available: 2,
        })
        .unwrap();
        assert_eq!(connected["status"], "connected");
        assert_eq!(connected["printers_available"], 2);

        let disconnected = serde_json::to_value(PrinterStatusResponse {
            status: SubsystemStatus::Disconnected,
            printers_available: 0,
        })
        .unwrap();
        assert_eq!(disconnected["status"], "disconnected");
    }
}
