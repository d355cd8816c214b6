//! Store backed by sharded concurrent maps.
//!
//! Writers to different users rarely contend, at the price of the global
//! snapshot: `tweets_by_authors` visits each author's shard separately, so a
//! concurrent write may be observed for one author and not for another.

use super::store::{Store, StoreStats};
use crate::domain::{FollowEdge, Tweet, TweetId, User, UserId};

use dashmap::DashMap;
use std::collections::{BTreeSet, HashSet};

pub struct ShardedStore {
    users: DashMap<UserId, User>,
    tweets: DashMap<TweetId, Tweet>,
    authored: DashMap<UserId, Vec<TweetId>>,
    follows: DashMap<UserId, BTreeSet<UserId>>,
}

impl ShardedStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            tweets: DashMap::new(),
            authored: DashMap::new(),
            follows: DashMap::new(),
        }
    }

    /// `shards` must be a power of two greater than one.
    pub fn with_shards(shards: usize) -> Self {
        Self {
            users: DashMap::with_shard_amount(shards),
            tweets: DashMap::with_shard_amount(shards),
            authored: DashMap::with_shard_amount(shards),
            follows: DashMap::with_shard_amount(shards),
        }
    }

    fn authored_ids(&self, author_id: &UserId) -> Vec<TweetId> {
        self.authored
            .get(author_id)
            .map(|ids| ids.value().clone())
            .unwrap_or_default()
    }

    fn resolve(&self, ids: Vec<TweetId>, out: &mut Vec<Tweet>) {
        // Tweets are inserted before their index entry, so every id resolves.
        out.extend(
            ids.iter()
                .filter_map(|id| self.tweets.get(id).map(|t| t.value().clone())),
        );
    }
}

impl Default for ShardedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for ShardedStore {
    fn put_user(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    fn put_user_if_absent(&self, user: User) -> User {
        // The entry guard holds the shard's write lock until the clone is taken.
        self.users
            .entry(user.id.clone())
            .or_insert(user)
            .value()
            .clone()
    }

    fn get_user(&self, id: &UserId) -> Option<User> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    fn put_tweet(&self, tweet: Tweet) {
        let id = tweet.id.clone();
        let author_id = tweet.author_id.clone();

        match self.tweets.insert(id.clone(), tweet) {
            Some(previous) if previous.author_id == author_id => {}
            Some(previous) => {
                if let Some(mut ids) = self.authored.get_mut(&previous.author_id) {
                    ids.retain(|existing| existing != &id);
                }
                self.authored.entry(author_id).or_default().push(id);
            }
            None => self.authored.entry(author_id).or_default().push(id),
        }
    }

    fn tweets_by_author(&self, author_id: &UserId) -> Vec<Tweet> {
        let mut tweets = Vec::new();
        self.resolve(self.authored_ids(author_id), &mut tweets);
        tweets
    }

    fn tweets_by_authors(&self, author_ids: &[UserId]) -> Vec<Tweet> {
        let unique: HashSet<&UserId> = author_ids.iter().collect();

        let mut tweets = Vec::new();
        for author_id in unique {
            self.resolve(self.authored_ids(author_id), &mut tweets);
        }
        tweets
    }

    fn follow(&self, edge: &FollowEdge) {
        self.follows
            .entry(edge.follower_id.clone())
            .or_default()
            .insert(edge.followee_id.clone());
    }

    fn unfollow(&self, follower_id: &UserId, followee_id: &UserId) {
        {
            if let Some(mut followees) = self.follows.get_mut(follower_id) {
                followees.remove(followee_id);
            }
        }
        // The guard above must be released first: both touch the same shard.
        self.follows
            .remove_if(follower_id, |_, followees| followees.is_empty());
    }

    fn followees_of(&self, follower_id: &UserId) -> Vec<UserId> {
        self.follows
            .get(follower_id)
            .map(|followees| followees.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            tweets: self.tweets.len(),
            follow_edges: self.follows.iter().map(|entry| entry.value().len()).sum(),
        }
    }
}
