//! Sorting and picking tags from an already fetched tag list

use crate::tag::classify::ReleaseKind;
use crate::tag::version_tag::VersionTag;
use log::debug;
use serde::{Deserialize, Serialize};

/// Which kinds of tags are eligible when picking the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagFilter {
    /// Stable releases only
    Release,
    /// Stable releases and release candidates
    #[default]
    ReleaseOrCandidate,
    /// Every parseable tag, including other prereleases
    Any,
}

impl TagFilter {
    #[inline]
    #[must_use]
    pub const fn accepts(&self, kind: ReleaseKind) -> bool {
        match self {
            Self::Release => matches!(kind, ReleaseKind::Release),
            Self::ReleaseOrCandidate => kind.is_release_or_rc(),
            Self::Any => true,
        }
    }
}

fn parse_all<I, S>(tags: I, tag_prefix: &str) -> impl Iterator<Item = VersionTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().filter_map(move |tag| {
        let tag = tag.as_ref();
        match VersionTag::parse(tag, tag_prefix) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("skipping tag: {e}");
                None
            }
        }
    })
}

/// Parse `tags` and return the parseable ones in ascending precedence order.
///
/// Unparseable tags are dropped. Tags with equal precedence keep their
/// input order.
pub fn sort_tags<I, S>(tags: I, tag_prefix: &str) -> Vec<VersionTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed: Vec<VersionTag> = parse_all(tags, tag_prefix).collect();
    parsed.sort();
    parsed
}

/// Highest-precedence tag in `tags` accepted by `filter`.
///
/// When several tags share the highest precedence the first one wins.
pub fn latest_tag<I, S>(tags: I, tag_prefix: &str, filter: TagFilter) -> Option<VersionTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_all(tags, tag_prefix)
        .filter(|tag| filter.accepts(tag.kind()))
        .fold(None, |best: Option<VersionTag>, tag| match best {
            Some(b) if tag <= b => Some(b),
            _ => Some(tag),
        })
}
