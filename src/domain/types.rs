use super::clock::Clock;
use super::error::DomainError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum tweet length, counted in bytes of the raw (untrimmed) content.
pub const MAX_TWEET_LENGTH: usize = 280;

/// Opaque identifier of a user, supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Unique identifier for a tweet.
///
/// Wrapper around a UUID string; also the secondary sort key when two tweets
/// share a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TweetId(pub String);

impl TweetId {
    /// Generates a new random UUID v4-based TweetId.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Builds the placeholder user created when someone tweets before registering.
    pub fn provisioned(id: UserId) -> Self {
        let name = placeholder_name(&id);
        Self { id, name }
    }
}

/// Display name given to users that were never explicitly registered.
pub fn placeholder_name(id: &UserId) -> String {
    format!("User-{}", id)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tweet {
    pub id: TweetId,
    #[serde(rename = "user_id")]
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Tweet {
    /// Validates `content` and stamps a new tweet with a fresh id and the clock's time.
    ///
    /// The content is stored exactly as given; trimming only decides emptiness.
    pub fn compose(
        author_id: UserId,
        content: &str,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        validate_content(content)?;

        Ok(Self {
            id: TweetId::generate(),
            author_id,
            content: content.to_string(),
            created_at: clock.now(),
        })
    }
}

/// A directed follow relationship. Edges only exist as pairs; they have no id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    pub follower_id: UserId,
    pub followee_id: UserId,
}

impl FollowEdge {
    pub fn new(follower_id: UserId, followee_id: UserId) -> Result<Self, DomainError> {
        validate_follow(&follower_id, &followee_id)?;
        Ok(Self {
            follower_id,
            followee_id,
        })
    }
}

/// Rejects content that is blank after trimming or longer than
/// [`MAX_TWEET_LENGTH`] bytes before trimming.
pub fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::EmptyContent);
    }

    if content.len() > MAX_TWEET_LENGTH {
        return Err(DomainError::ContentTooLong {
            length: content.len(),
            max: MAX_TWEET_LENGTH,
        });
    }

    Ok(())
}

pub fn validate_follow(follower_id: &UserId, followee_id: &UserId) -> Result<(), DomainError> {
    if follower_id == followee_id {
        return Err(DomainError::SelfFollow);
    }
    Ok(())
}
