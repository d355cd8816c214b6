//! Microblogging Backend Library
//!
//! Users post short messages ("tweets"), follow one another, and read a timeline
//! built from everyone they follow. The binary (`main.rs`) serves this library
//! over HTTP.
//!
//! ## Architecture Modules
//! Leaves first:
//!
//! - **`domain`**: Users, tweets, follow edges, their validation rules and the clock
//!   that stamps tweets.
//! - **`storage`**: The concurrent in-memory store (`InMemoryStore` with one global
//!   lock, or the sharded `ShardedStore`) and the per-entity façades over it.
//! - **`timeline`**: The tweet composer, the fan-out-on-read timeline assembler, the
//!   `Microblog` service that ties them together, and its HTTP handlers.
//! - **`config`**: Command-line and environment configuration for the binary.

pub mod config;
pub mod domain;
pub mod storage;
pub mod timeline;
