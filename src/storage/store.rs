use crate::domain::{FollowEdge, Tweet, User, UserId};

use serde::Serialize;

/// The primitive operations every backing store provides.
///
/// Each call must be linearizable on its own. Absence is reported as `None` or an
/// empty `Vec`, never as an error. Returned collections are snapshots taken at
/// the moment of the call.
pub trait Store: Send + Sync {
    /// Inserts or overwrites the user stored under `user.id`.
    fn put_user(&self, user: User);

    /// Inserts `user` only when its id is free, returning whichever user is stored
    /// afterwards. Lookup and insert happen under one lock acquisition.
    fn put_user_if_absent(&self, user: User) -> User;

    fn get_user(&self, id: &UserId) -> Option<User>;

    /// Inserts the tweet under its id. Author existence is not checked here.
    fn put_tweet(&self, tweet: Tweet);

    /// All tweets of one author, in no particular order.
    fn tweets_by_author(&self, author_id: &UserId) -> Vec<Tweet>;

    /// All tweets of several authors, gathered in one pass, in no particular order.
    fn tweets_by_authors(&self, author_ids: &[UserId]) -> Vec<Tweet>;

    /// Adds the edge; a no-op when it already exists.
    fn follow(&self, edge: &FollowEdge);

    /// Removes the edge; a no-op when it is absent.
    fn unfollow(&self, follower_id: &UserId, followee_id: &UserId);

    fn followees_of(&self, follower_id: &UserId) -> Vec<UserId>;

    fn stats(&self) -> StoreStats;
}

/// Entity counts, used by the periodic stats log and the health endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub users: usize,
    pub tweets: usize,
    pub follow_edges: usize,
}
