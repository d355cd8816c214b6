//! Tweet Composer
//!
//! Turns `(author, raw content)` into a persisted tweet:
//! 1. Provisions a placeholder user when the author is unknown. The check and the
//!    insert are one store operation, so a concurrent registration is never overwritten.
//! 2. Validates the content.
//! 3. Stamps the tweet with a fresh id and the clock's time, then stores it.
//!
//! A validation failure stores nothing. A user provisioned in step 1 stays; it is
//! the same user any later tweet by that author would create.

use super::ordering::sort_newest_first;
use crate::domain::{Clock, DomainError, Tweet, User, UserId};
use crate::storage::{TweetRepository, UserRepository};

use std::sync::Arc;

pub struct TweetComposer {
    users: Arc<dyn UserRepository>,
    tweets: Arc<dyn TweetRepository>,
    clock: Arc<dyn Clock>,
}

impl TweetComposer {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tweets: Arc<dyn TweetRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            tweets,
            clock,
        }
    }

    pub fn create_tweet(&self, author_id: &UserId, content: &str) -> Result<Tweet, DomainError> {
        self.ensure_author(author_id);

        let tweet = Tweet::compose(author_id.clone(), content, self.clock.as_ref())?;
        self.tweets.create(tweet.clone());

        tracing::debug!(
            "Stored tweet {} by {} ({} bytes)",
            tweet.id,
            author_id,
            tweet.content.len()
        );

        Ok(tweet)
    }

    /// Every tweet by one author, newest first.
    pub fn user_tweets(&self, user_id: &UserId) -> Vec<Tweet> {
        let mut tweets = self.tweets.get_by_author(user_id);
        sort_newest_first(&mut tweets);
        tweets
    }

    fn ensure_author(&self, author_id: &UserId) {
        self.users
            .get_or_create(User::provisioned(author_id.clone()));
    }
}
