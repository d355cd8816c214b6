//! Validation errors surfaced to callers of the core.
//!
//! "Not found" is never an error here: lookups return `Option` and listings
//! return empty sequences.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Content is empty after trimming surrounding whitespace.
    #[error("tweet content cannot be empty")]
    EmptyContent,

    /// Raw content is longer than the allowed maximum (in UTF-8 bytes).
    #[error("tweet exceeds character limit ({length} > {max})")]
    ContentTooLong { length: usize, max: usize },

    /// Follower and followee are the same user.
    #[error("cannot follow yourself")]
    SelfFollow,
}
