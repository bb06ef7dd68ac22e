//! Version comparison and upgrade validation

use crate::tag::error::{TagError, TagResult};
use crate::tag::parse::parse_version;
use log::warn;
use semver::Version;
use std::cmp::Ordering;

/// Compare two versions by semantic-version precedence.
///
/// Build metadata does not take part in precedence, so `1.0.0+a` and
/// `1.0.0+b` are equal here even though `Version`'s own `Ord` separates them.
#[inline]
#[must_use]
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

/// Compare two tags, returning the precedence ordering of their versions.
///
/// # Errors
///
/// Returns the first [`TagError::Parse`] encountered; `tag_a` is parsed first.
pub fn compare_tags(tag_a: &str, tag_b: &str, tag_prefix: &str) -> TagResult<Ordering> {
    let a = parse_version(tag_a, tag_prefix)?;
    let b = parse_version(tag_b, tag_prefix)?;
    Ok(cmp_precedence(&a, &b))
}

/// Compare two tags, returning `-1` if `tag_a < tag_b`, `0` if equal and `1`
/// if `tag_a > tag_b`.
///
/// # Errors
///
/// Returns [`TagError::Parse`] if either tag cannot be parsed.
pub fn compare_versions(tag_a: &str, tag_b: &str, tag_prefix: &str) -> TagResult<i32> {
    Ok(match compare_tags(tag_a, tag_b, tag_prefix)? {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

/// Check that moving from `current_tag` to `new_tag` is not a downgrade.
///
/// An empty `current_tag` means nothing is pinned yet, so any parseable
/// `new_tag` is accepted. A `current_tag` that cannot be parsed gives no
/// baseline to compare against; in that case only `new_tag` is validated.
/// Equal versions are accepted.
///
/// # Errors
///
/// * [`TagError::Parse`] for `new_tag` if it cannot be parsed
/// * [`TagError::Downgrade`] if `new_tag` precedes `current_tag`
pub fn validate_version_upgrade(
    current_tag: &str,
    new_tag: &str,
    tag_prefix: &str,
) -> TagResult<()> {
    if current_tag.is_empty() {
        return parse_version(new_tag, tag_prefix).map(|_| ());
    }

    let current = match parse_version(current_tag, tag_prefix) {
        Ok(v) => v,
        Err(e) => {
            warn!("current tag unparseable, skipping downgrade check: {e}");
            return parse_version(new_tag, tag_prefix).map(|_| ());
        }
    };

    let new = parse_version(new_tag, tag_prefix)?;

    if cmp_precedence(&new, &current) == Ordering::Less {
        return Err(TagError::Downgrade {
            current: current_tag.to_string(),
            new: new_tag.to_string(),
        });
    }

    Ok(())
}
