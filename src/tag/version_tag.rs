//! A tag string paired with its parsed version

use crate::tag::classify::ReleaseKind;
use crate::tag::compare::cmp_precedence;
use crate::tag::error::TagResult;
use crate::tag::parse::parse_version;
use semver::Version;
use std::cmp::Ordering;
use std::fmt;

/// An upstream tag together with the version it parsed to.
///
/// Ordering and equality follow version precedence only: `v1.0.0` and
/// `op-node/1.0.0+build` are equal.
#[derive(Debug, Clone)]
pub struct VersionTag {
    tag: String,
    version: Version,
}

impl VersionTag {
    /// Parse `tag`, keeping the original string for display.
    pub fn parse(tag: impl Into<String>, tag_prefix: &str) -> TagResult<Self> {
        let tag = tag.into();
        let version = parse_version(&tag, tag_prefix)?;
        Ok(Self { tag, version })
    }

    /// Original tag string
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }

    #[must_use]
    pub fn kind(&self) -> ReleaseKind {
        ReleaseKind::of(&self.version)
    }

    #[must_use]
    pub fn into_version(self) -> Version {
        self.version
    }
}

impl Ord for VersionTag {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_precedence(&self.version, &other.version)
    }
}

impl PartialOrd for VersionTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionTag {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionTag {}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
