//! ---
//! woeusb_section: "02-common-runtime"
//! woeusb_subsection: "module"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "Shared primitives and utilities for WoeUSB binaries."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
//! Shared runtime primitives: configuration loading and tracing setup.

pub mod config;
pub mod logging;

pub use config::{AppConfig, LoadedAppConfig, LoggingConfig};
pub use logging::{init_tracing, LogFormat};
