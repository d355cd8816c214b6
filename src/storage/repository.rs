//! Entity façades over a shared [`Store`].
//!
//! Each façade exposes only the operations of its entity, so the composer and the
//! assembler depend on narrow capabilities instead of the whole store. The traits
//! are the seam for swapping the backing store without touching business logic.

use super::store::Store;
use crate::domain::{FollowEdge, Tweet, User, UserId};

use std::sync::Arc;

pub trait UserRepository: Send + Sync {
    fn create(&self, user: User);
    /// Stores `user` unless one already exists under its id; returns the stored user.
    fn get_or_create(&self, user: User) -> User;
    fn get_by_id(&self, id: &UserId) -> Option<User>;
}

pub trait TweetRepository: Send + Sync {
    fn create(&self, tweet: Tweet);
    fn get_by_author(&self, author_id: &UserId) -> Vec<Tweet>;
    fn get_by_authors(&self, author_ids: &[UserId]) -> Vec<Tweet>;
}

pub trait FollowRepository: Send + Sync {
    fn follow(&self, edge: &FollowEdge);
    fn unfollow(&self, follower_id: &UserId, followee_id: &UserId);
    fn followees(&self, follower_id: &UserId) -> Vec<UserId>;
}

#[derive(Clone)]
pub struct UserFacade {
    store: Arc<dyn Store>,
}

impl UserFacade {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl UserRepository for UserFacade {
    fn create(&self, user: User) {
        self.store.put_user(user);
    }

    fn get_or_create(&self, user: User) -> User {
        self.store.put_user_if_absent(user)
    }

    fn get_by_id(&self, id: &UserId) -> Option<User> {
        self.store.get_user(id)
    }
}

#[derive(Clone)]
pub struct TweetFacade {
    store: Arc<dyn Store>,
}

impl TweetFacade {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl TweetRepository for TweetFacade {
    fn create(&self, tweet: Tweet) {
        self.store.put_tweet(tweet);
    }

    fn get_by_author(&self, author_id: &UserId) -> Vec<Tweet> {
        self.store.tweets_by_author(author_id)
    }

    fn get_by_authors(&self, author_ids: &[UserId]) -> Vec<Tweet> {
        self.store.tweets_by_authors(author_ids)
    }
}

#[derive(Clone)]
pub struct FollowFacade {
    store: Arc<dyn Store>,
}

impl FollowFacade {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl FollowRepository for FollowFacade {
    fn follow(&self, edge: &FollowEdge) {
        self.store.follow(edge);
    }

    fn unfollow(&self, follower_id: &UserId, followee_id: &UserId) {
        self.store.unfollow(follower_id, followee_id);
    }

    fn followees(&self, follower_id: &UserId) -> Vec<UserId> {
        self.store.followees_of(follower_id)
    }
}
