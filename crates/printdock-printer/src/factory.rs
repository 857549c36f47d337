//! Gateway construction from configuration.

use crate::{CupsGateway, DisabledGateway, PrinterGateway};
use printdock_core::Config;
use std::sync::Arc;

/// Build the printer gateway the configuration asks for.
///
/// With `PRINTING_ENABLED=false` this returns the explicit disabled variant
/// instead of a CUPS adapter that would probe and fail on every call.
pub fn create_gateway(config: &Config) -> Arc<dyn PrinterGateway> {
    if !config.printing_enabled {
        tracing::info!("Printing disabled by configuration");
        return Arc::new(DisabledGateway);
    }

    tracing::info!(
        lpstat = %config.lpstat_path,
        lp = %config.lp_path,
        host = config.cups_host.as_deref().unwrap_or("local"),
        "Using CUPS printer gateway"
    );

    Arc::new(CupsGateway::new(
        config.lpstat_path.clone(),
        config.lpoptions_path.clone(),
        config.lp_path.clone(),
        config.cups_host.clone(),
    ))
}
