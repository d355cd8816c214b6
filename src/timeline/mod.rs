//! Timeline Module
//!
//! The orchestration layer above the storage façades, and its HTTP surface.
//!
//! ## Responsibilities
//! - **Composition**: validating and persisting tweets, provisioning unknown authors.
//! - **Assembly**: fan-out-on-read timelines, merged newest first across followees.
//! - **Follows**: self-follow rejection, idempotent follow and unfollow.
//! - **API**: the `/api/v1` JSON endpoints served by the binary.
//!
//! ## Submodules
//! - **`composer`**: `TweetComposer`, create and per-user listing.
//! - **`assembler`**: `TimelineAssembler`, follow graph operations and timelines.
//! - **`ordering`**: the newest-first sort shared by both listings.
//! - **`service`**: `Microblog`, the single entry point wiring everything over one store.
//! - **`handlers`** / **`protocol`**: Axum handlers, routes and DTOs.

pub mod assembler;
pub mod composer;
pub mod handlers;
pub mod ordering;
pub mod protocol;
pub mod service;

pub use assembler::TimelineAssembler;
pub use composer::TweetComposer;
pub use service::Microblog;
