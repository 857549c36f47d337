//! Printer gateway trait and the disabled fallback implementation.

use async_trait::async_trait;
use printdock_core::models::PrinterDevice;
use std::path::Path;

/// Adapter over the printing subsystem.
///
/// Constructed explicitly and injected into the service layer as
/// `Arc<dyn PrinterGateway>`, so tests can swap in a double. Every call is
/// self-contained; there is no connection handle shared between calls.
#[async_trait]
pub trait PrinterGateway: Send + Sync {
    /// Probe connectivity to the printing subsystem. Failure is non-fatal:
    /// subsequent calls simply report no devices.
    async fn connect(&self) -> bool;

    /// Current list of registered printers. Empty when not connected.
    async fn list_devices(&self) -> Vec<PrinterDevice>;

    /// Whether `name` appears in the current device list. The list is
    /// re-fetched on every call, so the answer is only consistent at call
    /// time; a device can disappear before a subsequent submit.
    async fn is_available(&self, name: &str) -> bool {
        self.list_devices().await.iter().any(|d| d.name == name)
    }

    /// Send the file to the named device for printing under the given display
    /// title. All backend failures are converted to `false`.
    async fn submit(&self, name: &str, file_path: &Path, title: &str) -> bool;
}

/// Gateway used when printing is disabled by configuration.
///
/// Reports disconnected, lists no devices, and fails every submission, so the
/// rest of the system behaves exactly as if the spooler were unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGateway;

#[async_trait]
impl PrinterGateway for DisabledGateway {
    async fn connect(&self) -> bool {
        false
    }

    async fn list_devices(&self) -> Vec<PrinterDevice> {
        Vec::new()
    }

    async fn submit(&self, name: &str, _file_path: &Path, _title: &str) -> bool {
        tracing::debug!(printer = %name, "Printing disabled; rejecting submission");
        false
    }
}
