//! Ordered internal tools directory behind a small CRUD API.
//!
//! The core is the order-index maintenance in [`directory`]: every
//! mutation keeps the `order` field of the collection a dense permutation
//! of `1..=N`. Persistence goes through the `tool-store` crate, which
//! reads and writes the whole collection as one unit against a memory,
//! file or redis backend.

pub mod config;
pub mod directory;
pub mod server;
