//! ---
//! woeusb_section: "03-cli"
//! woeusb_subsection: "binary"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "Command line front-end for the release version contract."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use woeusb_common::config::{AppConfig, DEFAULT_CANDIDATES};
use woeusb_common::logging::init_tracing;
use woeusb_versioning::VersionInfo;

mod check;
mod version;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "WoeUSB release version utility",
    long_about = None
)]
struct Cli {
    #[arg(long, value_name = "FILE", global = true, help = "Path to configuration file")]
    config: Option<PathBuf>,

    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print the release version")]
    Version(version::VersionArgs),
    #[command(about = "Verify a version string against the release version rules")]
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", VersionInfo::current().extended());
        return Ok(());
    }

    let loaded = AppConfig::load_with_source(cli.config.as_deref(), &DEFAULT_CANDIDATES)?;
    init_tracing("woeusb", &loaded.config.logging)?;
    debug!(source = ?loaded.source, "configuration resolved");

    match cli.command {
        Some(Commands::Version(args)) => version::run(&args)?,
        Some(Commands::Check(args)) => check::run(&args)?,
        None => println!("{}", VersionInfo::current().cli_string()),
    }
    Ok(())
}
