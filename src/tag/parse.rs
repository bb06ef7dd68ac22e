//! Tag normalization and semantic version parsing
//!
//! Upstream repositories spell the same release in many ways
//! (`op-node/v1.16.3-rc1`, `v1.16.3-RC-1`, `1.16.3-rc.1`). Everything here
//! reduces a tag to a string the `semver` crate accepts.

use crate::tag::error::{TagError, TagResult};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use semver::Version;
use std::borrow::Cow;

lazy_static! {
    /// `-rc1`, `-rc.1`, `-rc-1`, `-RC1`, ...
    static ref RC_SUFFIX_RE: Result<Regex, regex::Error> = Regex::new(r"(?i)-rc[.-]?([0-9]+)");
    /// Leading `major[.minor[.patch]]` of a version with the `v` removed
    static ref VERSION_CORE_RE: Result<Regex, regex::Error> =
        Regex::new(r"^([0-9]+)(\.[0-9]+)?(\.[0-9]+)?");
}

/// Remove `tag_prefix` and a single following `/` from `tag`.
///
/// A tag that does not start with the prefix is returned unchanged.
fn strip_tag_prefix<'a>(tag: &'a str, tag_prefix: &str) -> &'a str {
    if tag_prefix.is_empty() {
        return tag;
    }

    match tag.strip_prefix(tag_prefix) {
        Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
        None => {
            debug!("tag {tag:?} does not start with prefix {tag_prefix:?}, using it as-is");
            tag
        }
    }
}

/// Rewrite every RC marker to the canonical `-rc.<digits>` form.
fn normalize_rc_format(version: &str) -> Cow<'_, str> {
    match RC_SUFFIX_RE.as_ref() {
        Ok(re) => re.replace_all(version, "-rc.${1}"),
        Err(_) => Cow::Borrowed(version),
    }
}

/// Fill in a missing minor or patch component with `0`.
///
/// `2` becomes `2.0.0` and `1.16-rc.1` becomes `1.16.0-rc.1`; anything
/// after the numeric core is kept as-is.
fn pad_version_core(version: &str) -> Cow<'_, str> {
    let Ok(re) = VERSION_CORE_RE.as_ref() else {
        return Cow::Borrowed(version);
    };
    let Some(caps) = re.captures(version) else {
        return Cow::Borrowed(version);
    };
    if caps.get(3).is_some() {
        return Cow::Borrowed(version);
    }

    let major = caps.get(1).map_or("", |m| m.as_str());
    let minor = caps.get(2).map_or(".0", |m| m.as_str());
    let rest = caps.get(0).map_or(version, |m| &version[m.end()..]);
    Cow::Owned(format!("{major}{minor}.0{rest}"))
}

/// Normalize a raw tag into the string handed to the semver parser.
///
/// Strips the tag prefix and rewrites RC markers. The optional leading `v`
/// is kept; [`parse_version`] drops it right before parsing. This never
/// fails.
#[must_use]
pub fn normalize_tag(tag: &str, tag_prefix: &str) -> String {
    normalize_rc_format(strip_tag_prefix(tag, tag_prefix)).into_owned()
}

/// Parse a release tag into a semantic version.
///
/// # Arguments
///
/// * `tag` - Raw tag, e.g. `"op-node/v1.16.3-rc1"`
/// * `tag_prefix` - Component prefix expected in front of the version, or `""`
///
/// # Errors
///
/// Returns [`TagError::Parse`] carrying the original `tag` when the
/// normalized string is not a valid semantic version. Missing minor and
/// patch components are filled in with `0` before parsing (`v1.16` parses
/// as `1.16.0`).
pub fn parse_version(tag: &str, tag_prefix: &str) -> TagResult<Version> {
    let normalized = normalize_tag(tag, tag_prefix);
    let version_str = pad_version_core(normalized.strip_prefix('v').unwrap_or(&normalized));

    Version::parse(&version_str).map_err(|e| TagError::parse(tag, e))
}
