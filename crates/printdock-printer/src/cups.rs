//! CUPS gateway backed by the command-line tools.
//!
//! Each operation spawns a fresh `lpstat` / `lpoptions` / `lp` process, so
//! there is no connection handle shared between calls and nothing to
//! reconnect. The tool paths and an optional remote CUPS host come from
//! configuration.

use crate::gateway::PrinterGateway;
use crate::options::{option_value, parse_options};
use async_trait::async_trait;
use printdock_core::models::{PrinterDevice, PrinterState};
use std::path::Path;
use std::process::Output;
use tokio::process::Command;

#[derive(Clone)]
pub struct CupsGateway {
    lpstat: String,
    lpoptions: String,
    lp: String,
    host: Option<String>,
}

impl CupsGateway {
    pub fn new(
        lpstat: impl Into<String>,
        lpoptions: impl Into<String>,
        lp: impl Into<String>,
        host: Option<String>,
    ) -> Self {
        Self {
            lpstat: lpstat.into(),
            lpoptions: lpoptions.into(),
            lp: lp.into(),
            host,
        }
    }

    fn command(&self, program: &str) -> Command {
        let mut cmd = Command::new(program);
        if let Some(host) = &self.host {
            cmd.arg("-h").arg(host);
        }
        cmd
    }

    /// Run a command, converting spawn failures into `None` with a log line.
    async fn run(&self, mut cmd: Command, what: &str) -> Option<Output> {
        match cmd.output().await {
            Ok(output) => Some(output),
            Err(e) => {
                tracing::debug!(operation = what, error = %e, "CUPS command failed to run");
                None
            }
        }
    }

    /// Fetch info, location, and state for one printer via `lpoptions -p`.
    async fn device_details(&self, name: &str) -> PrinterDevice {
        let mut cmd = self.command(&self.lpoptions);
        cmd.arg("-p").arg(name);

        let mut device = PrinterDevice {
            name: name.to_string(),
            info: String::new(),
            location: String::new(),
            state: PrinterState::Unknown,
        };

        let Some(output) = self.run(cmd, "lpoptions").await else {
            return device;
        };
        if !output.status.success() {
            tracing::debug!(printer = %name, "lpoptions reported failure");
            return device;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let pairs = parse_options(&stdout);

        if let Some(info) = option_value(&pairs, "printer-info") {
            device.info = info.to_string();
        }
        if let Some(location) = option_value(&pairs, "printer-location") {
            device.location = location.to_string();
        }
        if let Some(code) = option_value(&pairs, "printer-state").and_then(|v| v.parse().ok()) {
            device.state = PrinterState::from_ipp_code(code);
        }

        device
    }
}

#[async_trait]
impl PrinterGateway for CupsGateway {
    async fn connect(&self) -> bool {
        let mut cmd = self.command(&self.lpstat);
        cmd.arg("-r");

        let Some(output) = self.run(cmd, "lpstat -r").await else {
            return false;
        };

        // `lpstat -r` prints "scheduler is running" / "scheduler is not running"
        let stdout = String::from_utf8_lossy(&output.stdout);
        output.status.success() && stdout.contains("is running") && !stdout.contains("not running")
    }

    async fn list_devices(&self) -> Vec<PrinterDevice> {
        let mut cmd = self.command(&self.lpstat);
        cmd.arg("-e");

        let Some(output) = self.run(cmd, "lpstat -e").await else {
            return Vec::new();
        };
        if !output.status.success() {
            tracing::debug!("lpstat -e reported failure; treating as no devices");
            return Vec::new();
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let names: Vec<String> = stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        let mut devices = Vec::with_capacity(names.len());
        for name in names {
            devices.push(self.device_details(&name).await);
        }

        devices
    }

    async fn submit(&self, name: &str, file_path: &Path, title: &str) -> bool {
        let mut cmd = self.command(&self.lp);
        cmd.arg("-d").arg(name).arg("-t").arg(title).arg(file_path);

        let Some(output) = self.run(cmd, "lp").await else {
            return false;
        };

        if output.status.success() {
            tracing::info!(printer = %name, file = %file_path.display(), "Print job accepted by spooler");
            true
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(
                printer = %name,
                file = %file_path.display(),
                stderr = %stderr.trim(),
                "Print submission rejected by spooler"
            );
            false
        }
    }
}
