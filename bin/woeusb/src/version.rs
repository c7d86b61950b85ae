//! ---
//! woeusb_section: "03-cli"
//! woeusb_subsection: "binary"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "Command line front-end for the release version contract."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
use anyhow::Result;
use clap::Args;
use woeusb_versioning::{version, VersionInfo};

/// Output selection for `woeusb version`.
#[derive(Debug, Args)]
pub struct VersionArgs {
    /// Print only the bare version string.
    #[arg(long, conflicts_with = "json")]
    pub short: bool,
    /// Print the version and build metadata as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &VersionArgs) -> Result<()> {
    if args.short {
        println!("{}", version());
        return Ok(());
    }
    let info = VersionInfo::current();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.extended());
    }
    Ok(())
}
