//! Domain Module
//!
//! The leaf entities of the microblog and the rules that guard them.
//!
//! ## Core Concepts
//! - **Users**: identified by an opaque caller-supplied `UserId`; immutable once created.
//! - **Tweets**: short messages stamped with a strictly increasing `created_at`.
//! - **Follow edges**: directed `(follower, followee)` pairs; self-edges are rejected.
//! - **Validation**: content and follow checks run before any write reaches the store.

pub mod clock;
pub mod error;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::DomainError;
pub use types::*;

#[cfg(test)]
mod tests;
