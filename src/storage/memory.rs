//! Coarse-locked in-memory store.
//!
//! Every primitive takes the single store-wide `RwLock` (shared for reads,
//! exclusive for writes) for the duration of one map operation and nothing else.

use super::store::{Store, StoreStats};
use crate::domain::{FollowEdge, Tweet, TweetId, User, UserId};

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    tweets: HashMap<TweetId, Tweet>,
    /// Author -> ids of the tweets they wrote, in insertion order.
    authored: HashMap<UserId, Vec<TweetId>>,
    /// Follower -> followees.
    follows: HashMap<UserId, BTreeSet<UserId>>,
}

impl StoreState {
    fn collect_authored(&self, author_id: &UserId, out: &mut Vec<Tweet>) {
        if let Some(ids) = self.authored.get(author_id) {
            out.extend(ids.iter().filter_map(|id| self.tweets.get(id).cloned()));
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Mutations are single map updates, so a poisoned lock still guards
    // consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for InMemoryStore {
    fn put_user(&self, user: User) {
        self.write().users.insert(user.id.clone(), user);
    }

    fn put_user_if_absent(&self, user: User) -> User {
        self.write()
            .users
            .entry(user.id.clone())
            .or_insert(user)
            .clone()
    }

    fn get_user(&self, id: &UserId) -> Option<User> {
        self.read().users.get(id).cloned()
    }

    fn put_tweet(&self, tweet: Tweet) {
        let mut state = self.write();
        let id = tweet.id.clone();
        let author_id = tweet.author_id.clone();

        match state.tweets.insert(id.clone(), tweet) {
            Some(previous) if previous.author_id == author_id => {}
            Some(previous) => {
                if let Some(ids) = state.authored.get_mut(&previous.author_id) {
                    ids.retain(|existing| existing != &id);
                }
                state.authored.entry(author_id).or_default().push(id);
            }
            None => state.authored.entry(author_id).or_default().push(id),
        }
    }

    fn tweets_by_author(&self, author_id: &UserId) -> Vec<Tweet> {
        let state = self.read();
        let mut tweets = Vec::new();
        state.collect_authored(author_id, &mut tweets);
        tweets
    }

    fn tweets_by_authors(&self, author_ids: &[UserId]) -> Vec<Tweet> {
        let unique: HashSet<&UserId> = author_ids.iter().collect();

        let state = self.read();
        let mut tweets = Vec::new();
        for author_id in unique {
            state.collect_authored(author_id, &mut tweets);
        }
        tweets
    }

    fn follow(&self, edge: &FollowEdge) {
        self.write()
            .follows
            .entry(edge.follower_id.clone())
            .or_default()
            .insert(edge.followee_id.clone());
    }

    fn unfollow(&self, follower_id: &UserId, followee_id: &UserId) {
        let mut state = self.write();
        if let Some(followees) = state.follows.get_mut(follower_id) {
            followees.remove(followee_id);
            if followees.is_empty() {
                state.follows.remove(follower_id);
            }
        }
    }

    fn followees_of(&self, follower_id: &UserId) -> Vec<UserId> {
        self.read()
            .follows
            .get(follower_id)
            .map(|followees| followees.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn stats(&self) -> StoreStats {
        let state = self.read();
        StoreStats {
            users: state.users.len(),
            tweets: state.tweets.len(),
            follow_edges: state.follows.values().map(BTreeSet::len).sum(),
        }
    }
}
