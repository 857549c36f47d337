//! Printdock Printer Library
//!
//! Gateway to the CUPS printing subsystem. The `PrinterGateway` trait is the
//! seam between the service layer and the actual spooler: the production
//! implementation (`CupsGateway`) shells out to the CUPS command-line tools,
//! while `DisabledGateway` is the explicit "capability unavailable" variant
//! used when printing is turned off by configuration.
//!
//! Backend failures never escape the gateway as errors; every operation
//! degrades to "disconnected", an empty device list, or a `false` submit
//! result, and the cause is logged.

pub mod cups;
pub mod factory;
pub mod gateway;
pub(crate) mod options;

pub use cups::CupsGateway;
pub use factory::create_gateway;
pub use gateway::{DisabledGateway, PrinterGateway};
