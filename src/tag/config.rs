//! Per-dependency tag configuration

use crate::tag::classify::{self, ReleaseKind};
use crate::tag::compare;
use crate::tag::error::TagResult;
use crate::tag::parse;
use crate::tag::select::{self, TagFilter};
use crate::tag::version_tag::VersionTag;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tag settings for one tracked dependency.
///
/// Deserializes from the camelCase form used in dependency manifests,
/// e.g. `{"tagPrefix": "op-node"}`. A missing `tagPrefix` means the
/// dependency's tags carry no prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagConfig {
    pub tag_prefix: String,
}

impl TagConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: config for tags of the form `<prefix>/<version>`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new().tag_prefix(prefix)
    }

    /// Set the tag prefix
    #[must_use]
    pub fn tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = prefix.into();
        self
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    #[must_use]
    pub fn normalize(&self, tag: &str) -> String {
        parse::normalize_tag(tag, &self.tag_prefix)
    }

    pub fn parse(&self, tag: &str) -> TagResult<Version> {
        parse::parse_version(tag, &self.tag_prefix)
    }

    pub fn parse_tag(&self, tag: impl Into<String>) -> TagResult<VersionTag> {
        VersionTag::parse(tag, &self.tag_prefix)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    pub fn compare(&self, tag_a: &str, tag_b: &str) -> TagResult<Ordering> {
        compare::compare_tags(tag_a, tag_b, &self.tag_prefix)
    }

    pub fn validate_upgrade(&self, current_tag: &str, new_tag: &str) -> TagResult<()> {
        compare::validate_version_upgrade(current_tag, new_tag, &self.tag_prefix)
    }

    // ========================================================================
    // Classification
    // ========================================================================

    #[must_use]
    pub fn classify(&self, tag: &str) -> Option<ReleaseKind> {
        classify::classify(tag, &self.tag_prefix)
    }

    #[must_use]
    pub fn is_release(&self, tag: &str) -> bool {
        classify::is_release_version(tag, &self.tag_prefix)
    }

    #[must_use]
    pub fn is_rc(&self, tag: &str) -> bool {
        classify::is_rc_version(tag, &self.tag_prefix)
    }

    #[must_use]
    pub fn is_release_or_rc(&self, tag: &str) -> bool {
        classify::is_release_or_rc_version(tag, &self.tag_prefix)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn sort<I, S>(&self, tags: I) -> Vec<VersionTag>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        select::sort_tags(tags, &self.tag_prefix)
    }

    pub fn latest<I, S>(&self, tags: I, filter: TagFilter) -> Option<VersionTag>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        select::latest_tag(tags, &self.tag_prefix, filter)
    }
}
