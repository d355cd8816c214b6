//! Storage Module
//!
//! Holds every user, tweet and follow edge in memory and exposes atomic primitive
//! operations over them.
//!
//! ## Core Concepts
//! - **`Store`**: the primitive contract; every call is linearizable on its own.
//! - **`InMemoryStore`**: one store-wide `RwLock`, giving a single global snapshot per call.
//! - **`ShardedStore`**: `DashMap`-backed; higher write throughput, per-key snapshots only.
//! - **Façades**: `UserFacade`, `TweetFacade`, `FollowFacade` are narrow typed views
//!   over a shared store, consumed by the timeline layer through repository traits.

pub mod memory;
pub mod repository;
pub mod sharded;
pub mod store;

pub use memory::InMemoryStore;
pub use repository::{
    FollowFacade, FollowRepository, TweetFacade, TweetRepository, UserFacade, UserRepository,
};
pub use sharded::ShardedStore;
pub use store::{Store, StoreStats};
