//! Timeline Assembler
//!
//! Fan-out-on-read: a timeline is built at request time from the follow graph and
//! the followees' tweets. The followee set and the tweets are read in two
//! separate store calls, so a follow or unfollow racing with the read may or may
//! not be reflected. Each call on its own is consistent.

use super::ordering::sort_newest_first;
use crate::domain::{DomainError, FollowEdge, Tweet, UserId};
use crate::storage::{FollowRepository, TweetRepository};

use std::sync::Arc;

pub struct TimelineAssembler {
    follows: Arc<dyn FollowRepository>,
    tweets: Arc<dyn TweetRepository>,
}

impl TimelineAssembler {
    pub fn new(follows: Arc<dyn FollowRepository>, tweets: Arc<dyn TweetRepository>) -> Self {
        Self { follows, tweets }
    }

    pub fn follow_user(&self, follower_id: &UserId, followee_id: &UserId) -> Result<(), DomainError> {
        let edge = FollowEdge::new(follower_id.clone(), followee_id.clone())?;
        self.follows.follow(&edge);
        tracing::debug!("{} follows {}", follower_id, followee_id);
        Ok(())
    }

    /// Always succeeds, including when no such edge exists.
    pub fn unfollow_user(&self, follower_id: &UserId, followee_id: &UserId) {
        self.follows.unfollow(follower_id, followee_id);
        tracing::debug!("{} unfollowed {}", follower_id, followee_id);
    }

    pub fn following(&self, user_id: &UserId) -> Vec<UserId> {
        self.follows.followees(user_id)
    }

    /// Tweets of everyone `user_id` follows, newest first.
    pub fn timeline(&self, user_id: &UserId) -> Vec<Tweet> {
        let followees = self.follows.followees(user_id);
        if followees.is_empty() {
            return Vec::new();
        }

        let mut tweets = self.tweets.get_by_authors(&followees);
        sort_newest_first(&mut tweets);

        tracing::debug!(
            "Assembled timeline for {}: {} tweets from {} followees",
            user_id,
            tweets.len(),
            followees.len()
        );

        tweets
    }
}
