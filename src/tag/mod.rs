//! Release tag operations module
//!
//! Normalizes upstream release tags into semantic versions, compares them,
//! and classifies them as releases or release candidates.

pub mod classify;
pub mod compare;
pub mod config;
pub mod error;
pub mod parse;
pub mod select;
pub mod version_tag;

// Re-export error types
pub use error::{TagError, TagResult};

// Re-export configuration
pub use config::TagConfig;

// Re-export operations
pub use classify::{
    ReleaseKind, classify, is_rc_version, is_release_or_rc_version, is_release_version,
};
pub use compare::{cmp_precedence, compare_tags, compare_versions, validate_version_upgrade};
pub use parse::{normalize_tag, parse_version};
pub use select::{TagFilter, latest_tag, sort_tags};
pub use version_tag::VersionTag;
