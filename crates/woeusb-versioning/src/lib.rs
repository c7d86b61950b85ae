//! ---
//! woeusb_section: "01-version-metadata"
//! woeusb_subsection: "module"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "Release version contract and build metadata."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Exposes the WoeUSB release version as an immutable, validated constant
//! together with the build metadata captured when the crate was compiled.

pub mod build_info;
pub mod version;

pub use build_info::VersionInfo;
pub use version::{
    current, validate, version, SegmentPosition, VersionError, VersionString, VERSION,
};
