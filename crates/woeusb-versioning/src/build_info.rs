//! ---
//! woeusb_section: "01-version-metadata"
//! woeusb_subsection: "module"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "Release version contract and build metadata."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
use serde::Serialize;

use crate::version;

const UNKNOWN: &str = "UNKNOWN";
const IDEMPOTENT_OUTPUT: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Release version plus the build facts captured by `vergen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Release version.
    pub version: String,
    /// Git commit hash captured at build time.
    pub git_sha: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
    /// Target triple used for the build.
    pub target: String,
    /// `debug` or `release`, derived from the cargo debug setting.
    pub profile: String,
}

impl VersionInfo {
    /// Snapshot of the facts compiled into this binary.
    #[must_use]
    pub fn current() -> Self {
        let profile = match build_fact(option_env!("VERGEN_CARGO_DEBUG")) {
            "true" => "debug",
            UNKNOWN => UNKNOWN,
            _ => "release",
        };
        Self {
            version: version::current().to_string(),
            git_sha: build_fact(option_env!("VERGEN_GIT_SHA")).to_owned(),
            build_timestamp: build_fact(option_env!("VERGEN_BUILD_TIMESTAMP")).to_owned(),
            target: build_fact(option_env!("VERGEN_CARGO_TARGET_TRIPLE")).to_owned(),
            profile: profile.to_owned(),
        }
    }

    /// `<version> (<sha>)`, printed by a bare `woeusb` invocation.
    #[must_use]
    pub fn cli_string(&self) -> String {
        format!("{} ({})", self.version, self.git_sha)
    }

    /// `WoeUSB v<version> (git <sha>)`.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("WoeUSB v{} (git {})", self.version, self.git_sha)
    }

    /// The banner followed by `Built:`, `Target:` and `Profile:` lines.
    #[must_use]
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nBuilt: {built}\nTarget: {target}\nProfile: {profile}",
            banner = self.banner(),
            built = self.build_timestamp,
            target = self.target,
            profile = self.profile
        )
    }
}

/// vergen writes [`IDEMPOTENT_OUTPUT`] instead of leaving a variable unset
/// when it cannot read a fact, e.g. git outside a checkout.
fn build_fact(value: Option<&'static str>) -> &'static str {
    match value {
        Some(fact) if !fact.is_empty() && fact != IDEMPOTENT_OUTPUT => fact,
        _ => UNKNOWN,
    }
}
