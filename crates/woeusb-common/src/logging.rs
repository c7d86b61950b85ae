//! ---
//! woeusb_section: "02-common-runtime"
//! woeusb_subsection: "module"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "Shared primitives and utilities for WoeUSB binaries."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_appender::rolling::daily;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

pub const LOG_ENV: &str = "WOEUSB_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceCell<()> = OnceCell::new();

/// Available log formats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    StructuredJson,
    #[default]
    Pretty,
}

/// Resolve the filter directive: `WOEUSB_LOG`, then `RUST_LOG`, then `info`.
fn build_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to {}",
                LOG_ENV, err, DEFAULT_DIRECTIVE
            );
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }),
        Err(_) => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
        }
    }
}

/// Initialize the tracing subscriber based on configuration and environment variables.
///
/// Events go to stderr so stdout stays free for command output. When
/// `config.directory` is set a rolling daily JSON log file named
/// `<prefix>-<service>.log.<date>` is written there as well. Only the first
/// call installs a subscriber; later calls return `Ok(())` untouched.
///
/// Both sinks write synchronously: the process is short-lived and a
/// background writer would lose its tail when `main` returns.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) -> Result<()> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let fmt_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(std::io::stderr)
            .boxed(),
    };

    let file_layer = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).with_context(|| {
                format!("unable to create log directory {}", directory.display())
            })?;
            let prefix = config.file_prefix.as_deref().unwrap_or(service_name);
            let file_appender = daily(directory, format!("{}-{}.log", prefix, service_name));
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .json()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(build_filter())
        .with(fmt_layer)
        .with(file_layer)
        .try_init()
        .ok();
    let _ = INITIALISED.set(());

    info!(
        service = %service_name,
        log_dir = ?config.directory,
        format = ?config.format,
        "tracing initialised"
    );
    Ok(())
}
