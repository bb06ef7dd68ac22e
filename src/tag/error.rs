//! Release tag error types

use thiserror::Error;

/// Error types for release tag operations
#[derive(Debug, Error)]
pub enum TagError {
    /// Tag could not be parsed as a semantic version after normalization
    #[error("invalid version format {tag:?}: {source}")]
    Parse {
        /// The tag as supplied by the caller, before normalization
        tag: String,
        #[source]
        source: semver::Error,
    },

    /// Proposed tag precedes the current one
    #[error("version downgrade detected: {current} -> {new}")]
    Downgrade { current: String, new: String },
}

impl TagError {
    pub(crate) fn parse(tag: impl Into<String>, source: semver::Error) -> Self {
        TagError::Parse {
            tag: tag.into(),
            source,
        }
    }

    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TagError::Parse { .. })
    }

    #[must_use]
    pub fn is_downgrade(&self) -> bool {
        matches!(self, TagError::Downgrade { .. })
    }

    /// The original tag that failed to parse, if this is a parse error
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            TagError::Parse { tag, .. } => Some(tag),
            TagError::Downgrade { .. } => None,
        }
    }
}

/// Convenience result alias for release tag operations
pub type TagResult<T> = Result<T, TagError>;
