//! The operations the core exposes to its callers (the HTTP adapter, the binary, tests).

use super::assembler::TimelineAssembler;
use super::composer::TweetComposer;
use crate::domain::{Clock, DomainError, Tweet, User, UserId, placeholder_name};
use crate::storage::{FollowFacade, Store, StoreStats, TweetFacade, UserFacade, UserRepository};

use std::sync::Arc;

pub struct Microblog {
    store: Arc<dyn Store>,
    users: Arc<dyn UserRepository>,
    composer: TweetComposer,
    assembler: TimelineAssembler,
}

impl Microblog {
    /// Wires the façades, the composer and the assembler over one shared store.
    pub fn new(store: Arc<dyn Store>, clock: Arc<dyn Clock>) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserFacade::new(store.clone()));
        let tweets = Arc::new(TweetFacade::new(store.clone()));
        let follows = Arc::new(FollowFacade::new(store.clone()));

        Self {
            store,
            users: users.clone(),
            composer: TweetComposer::new(users, tweets.clone(), clock),
            assembler: TimelineAssembler::new(follows, tweets),
        }
    }

    pub fn create_tweet(&self, author_id: &UserId, content: &str) -> Result<Tweet, DomainError> {
        self.composer.create_tweet(author_id, content)
    }

    pub fn get_user_tweets(&self, user_id: &UserId) -> Vec<Tweet> {
        self.composer.user_tweets(user_id)
    }

    pub fn follow_user(&self, follower_id: &UserId, followee_id: &UserId) -> Result<(), DomainError> {
        self.assembler.follow_user(follower_id, followee_id)
    }

    pub fn unfollow_user(&self, follower_id: &UserId, followee_id: &UserId) {
        self.assembler.unfollow_user(follower_id, followee_id)
    }

    pub fn get_timeline(&self, user_id: &UserId) -> Vec<Tweet> {
        self.assembler.timeline(user_id)
    }

    pub fn get_following(&self, user_id: &UserId) -> Vec<UserId> {
        self.assembler.following(user_id)
    }

    /// Creates or renames a user. A blank name falls back to the placeholder name.
    pub fn register_user(&self, user_id: &UserId, name: &str) -> User {
        let name = match name.trim() {
            "" => placeholder_name(user_id),
            trimmed => trimmed.to_string(),
        };
        let user = User::new(user_id.clone(), name);
        self.users.create(user.clone());
        tracing::debug!("Registered user {}", user_id);
        user
    }

    pub fn get_user(&self, user_id: &UserId) -> Option<User> {
        self.users.get_by_id(user_id)
    }

    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}
