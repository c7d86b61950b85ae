//! ---
//! woeusb_section: "03-cli"
//! woeusb_subsection: "binary"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "Command line front-end for the release version contract."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};
use woeusb_versioning::{validate, version};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Version string to verify; defaults to the embedded release version.
    #[arg(value_name = "CANDIDATE")]
    pub candidate: Option<String>,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let candidate = args.candidate.as_deref().unwrap_or(version());
    if let Err(err) = validate(candidate) {
        warn!(candidate, error = %err, "version rejected");
        return Err(err).with_context(|| format!("'{candidate}' is not a valid release version"));
    }
    info!(candidate, "version accepted");
    println!("ok: {candidate}");
    Ok(())
}
