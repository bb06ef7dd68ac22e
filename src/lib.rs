//! `kodegen_tools_release_tags` - release tag normalization and upgrade checks
//!
//! Upstream projects publish tags as `v1.2.3`, `1.2.3`, `op-node/v1.2.3-rc1`
//! or `v1.2.3-RC-1`. This library turns those into comparable semantic
//! versions (via the `semver` crate) so a dependency updater can tell
//! releases from release candidates and refuse downgrades.

// Module declarations
pub mod tag;

// Re-export semver's version type used throughout the public API
pub use semver::Version;

// Re-export tag error types
pub use tag::{TagError, TagResult};

// Re-export tag configuration and value types
pub use tag::{ReleaseKind, TagConfig, TagFilter, VersionTag};

// Re-export tag operations
pub use tag::{
    classify, cmp_precedence, compare_tags, compare_versions, is_rc_version,
    is_release_or_rc_version, is_release_version, latest_tag, normalize_tag, parse_version,
    sort_tags, validate_version_upgrade,
};
