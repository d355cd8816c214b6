//! HTTP Protocol
//!
//! Endpoint paths and the JSON bodies exchanged with clients. Callers identify
//! themselves with the `X-User-ID` header.

use crate::domain::{Tweet, UserId};
use crate::storage::StoreStats;

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

pub const ENDPOINT_TWEETS: &str = "/api/v1/tweets";
pub const ENDPOINT_TIMELINE: &str = "/api/v1/timeline";
pub const ENDPOINT_USER_TWEETS: &str = "/api/v1/users/tweets";
pub const ENDPOINT_FOLLOW: &str = "/api/v1/follow";
pub const ENDPOINT_UNFOLLOW: &str = "/api/v1/unfollow";
pub const ENDPOINT_FOLLOWING: &str = "/api/v1/following";
pub const ENDPOINT_USERS: &str = "/api/v1/users";
pub const ENDPOINT_USER: &str = "/api/v1/users/:id";
pub const ENDPOINT_HEALTH: &str = "/api/v1/health";

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTweetRequest {
    /// A missing field is treated as empty content.
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FollowRequest {
    /// Missing and empty are both rejected with 400.
    #[serde(default)]
    pub followee_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UserTweetsParams {
    pub user_id: Option<String>,
}

/// A newest-first list of tweets (timeline or one user's tweets).
#[derive(Debug, Serialize, Deserialize)]
pub struct TweetListResponse {
    pub tweets: Vec<Tweet>,
    pub count: usize,
}

impl From<Vec<Tweet>> for TweetListResponse {
    fn from(tweets: Vec<Tweet>) -> Self {
        Self {
            count: tweets.len(),
            tweets,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FollowingResponse {
    pub followee_ids: Vec<UserId>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub stats: StoreStats,
}
