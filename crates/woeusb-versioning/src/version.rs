//! ---
//! woeusb_section: "01-version-metadata"
//! woeusb_subsection: "module"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "Release version contract and build metadata."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
//! The release version contract.
//!
//! [`VERSION`] is fixed when the crate is compiled and never changes while the
//! process runs. It is dot-delimited and its first two segments (major and
//! minor) consist only of the ASCII digits `0-9`. Segments after the minor are
//! not constrained. A malformed package version is rejected by a `const`
//! assertion, so it fails the build rather than the running program.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Release version of the workspace, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const _: () = assert!(
    is_well_formed(VERSION),
    "package version must start with numeric major and minor segments"
);

static CURRENT: VersionString = VersionString {
    raw: Cow::Borrowed(VERSION),
};

/// Returns the release version string.
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

/// Returns the validated release version.
///
/// Every call hands out the same `'static` value.
#[must_use]
pub fn current() -> &'static VersionString {
    &CURRENT
}

/// Ways a candidate version string can break the contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    /// The candidate was empty.
    #[error("version string is empty")]
    Empty,
    /// Splitting on `.` produced fewer than two segments.
    #[error("version '{found}' must have at least major.minor segments")]
    MissingMinor {
        /// The rejected candidate.
        found: String,
    },
    /// The major or minor segment contains something other than `0-9`.
    #[error("{position} segment '{segment}' must contain only decimal digits")]
    NonNumericSegment {
        /// Which leading segment was rejected.
        position: SegmentPosition,
        /// The rejected segment text.
        segment: String,
    },
    /// The value is well formed but cannot be read as semantic versioning.
    #[error("version '{found}' is not a semantic version: {reason}")]
    NotSemver {
        /// The rejected candidate.
        found: String,
        /// Parser message from the semver crate.
        reason: String,
    },
}

/// Names the two leading segments the contract constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    /// First segment.
    Major,
    /// Second segment.
    Minor,
}

impl fmt::Display for SegmentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentPosition::Major => f.write_str("major"),
            SegmentPosition::Minor => f.write_str("minor"),
        }
    }
}

/// Check `candidate` against the contract, reporting the first broken rule.
///
/// Rules are checked in order: non-empty, at least two segments, numeric
/// major, numeric minor.
pub fn validate(candidate: &str) -> Result<(), VersionError> {
    if candidate.is_empty() {
        return Err(VersionError::Empty);
    }
    let mut segments = candidate.split('.');
    let major = segments.next().unwrap_or_default();
    let Some(minor) = segments.next() else {
        return Err(VersionError::MissingMinor {
            found: candidate.to_owned(),
        });
    };
    for (position, segment) in [(SegmentPosition::Major, major), (SegmentPosition::Minor, minor)] {
        if !is_numeric(segment.as_bytes()) {
            return Err(VersionError::NonNumericSegment {
                position,
                segment: segment.to_owned(),
            });
        }
    }
    Ok(())
}

const fn is_numeric(segment: &[u8]) -> bool {
    if segment.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < segment.len() {
        if !segment[i].is_ascii_digit() {
            return false;
        }
        i += 1;
    }
    true
}

/// Compile-time twin of [`validate`].
const fn is_well_formed(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    let mut dots = 0;
    let mut run = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'.' {
            if run == 0 {
                return false;
            }
            dots += 1;
            if dots == 2 {
                return true;
            }
            run = 0;
        } else if dots < 2 {
            if !b.is_ascii_digit() {
                return false;
            }
            run += 1;
        }
        i += 1;
    }
    dots == 1 && run > 0
}

/// A version string known to satisfy the contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionString {
    raw: Cow<'static, str>,
}

impl VersionString {
    /// Validate `candidate` and wrap it.
    pub fn parse(candidate: &str) -> Result<Self, VersionError> {
        validate(candidate)?;
        Ok(Self {
            raw: Cow::Owned(candidate.to_owned()),
        })
    }

    /// The version text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// All dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }

    /// The major segment, digits only.
    #[must_use]
    pub fn major(&self) -> &str {
        self.raw.split('.').next().unwrap_or_default()
    }

    /// The minor segment, digits only.
    #[must_use]
    pub fn minor(&self) -> &str {
        self.raw.split('.').nth(1).unwrap_or_default()
    }

    /// Everything after `major.minor.`, if present.
    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.raw.splitn(3, '.').nth(2)
    }

    /// Read the value as a semantic version. A bare `major.minor` is taken as
    /// `major.minor.0`.
    pub fn to_semver(&self) -> Result<semver::Version, VersionError> {
        let parsed = match self.qualifier() {
            Some(_) => semver::Version::parse(&self.raw),
            None => semver::Version::parse(&format!("{}.0", self.raw)),
        };
        parsed.map_err(|err| VersionError::NotSemver {
            found: self.raw.to_string(),
            reason: err.to_string(),
        })
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for VersionString {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl FromStr for VersionString {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionString {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self {
            raw: Cow::Owned(value),
        })
    }
}

impl From<VersionString> for String {
    fn from(value: VersionString) -> Self {
        value.raw.into_owned()
    }
}

impl PartialEq<str> for VersionString {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for VersionString {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}
