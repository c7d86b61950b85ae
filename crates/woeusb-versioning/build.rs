//! ---
//! woeusb_section: "01-version-metadata"
//! woeusb_subsection: "build"
//! woeusb_type: "source"
//! woeusb_scope: "build"
//! woeusb_description: "Captures build metadata for the version contract."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
use vergen::EmitBuilder;

// No `fail_on_error`: source tarballs have no git checkout, and the missing
// facts are reported as UNKNOWN at runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .build_timestamp()
        .all_cargo()
        .git_sha(true)
        .emit()?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
