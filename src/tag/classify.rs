//! Release / release-candidate classification of tags

use crate::tag::parse::parse_version;
use lazy_static::lazy_static;
use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// The whole prerelease is a single RC marker, nothing before or after it
    static ref RC_ONLY_RE: Result<Regex, regex::Error> = Regex::new(r"(?i)^-rc[.-]?[0-9]+$");
}

/// What kind of release a tag represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseKind {
    /// Stable release, no prerelease label (`v1.2.3`)
    Release,
    /// Prerelease that is exactly one RC marker (`v1.2.3-rc.1`)
    #[serde(rename = "rc")]
    ReleaseCandidate,
    /// Any other prerelease (`v1.2.3-alpha`, `v1.2.3-synctest.0`)
    Prerelease,
}

impl ReleaseKind {
    /// Classify an already parsed version.
    #[must_use]
    pub fn of(version: &Version) -> Self {
        if version.pre.is_empty() {
            Self::Release
        } else if is_rc_prerelease(version.pre.as_str()) {
            Self::ReleaseCandidate
        } else {
            Self::Prerelease
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::ReleaseCandidate => "rc",
            Self::Prerelease => "prerelease",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_release_or_rc(&self) -> bool {
        matches!(self, Self::Release | Self::ReleaseCandidate)
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_rc_prerelease(prerelease: &str) -> bool {
    let Ok(re) = RC_ONLY_RE.as_ref() else {
        return false;
    };
    re.is_match(&format!("-{prerelease}"))
}

/// Classify a tag, or `None` if it does not parse.
#[must_use]
pub fn classify(tag: &str, tag_prefix: &str) -> Option<ReleaseKind> {
    parse_version(tag, tag_prefix)
        .ok()
        .map(|v| ReleaseKind::of(&v))
}

/// True if `tag` is a stable release (no prerelease label).
///
/// - `"v1.0.0"` -> true
/// - `"v1.0.0-rc1"` -> false
/// - `"not-a-version"` -> false
#[must_use]
pub fn is_release_version(tag: &str, tag_prefix: &str) -> bool {
    classify(tag, tag_prefix) == Some(ReleaseKind::Release)
}

/// True if the prerelease label of `tag` is exactly one RC marker.
///
/// `-rc1`, `-rc.1`, `-rc-1` and `-RC1` all qualify. An RC marker inside a
/// larger label (`-alpha.rc1`, `-rc.1.extra`) does not.
#[must_use]
pub fn is_rc_version(tag: &str, tag_prefix: &str) -> bool {
    classify(tag, tag_prefix) == Some(ReleaseKind::ReleaseCandidate)
}

/// True if `tag` is a stable release or a release candidate.
#[must_use]
pub fn is_release_or_rc_version(tag: &str, tag_prefix: &str) -> bool {
    classify(tag, tag_prefix).is_some_and(|kind| kind.is_release_or_rc())
}
