//! List Store Module
//!
//! Wraps the external ordered-list key-value store that holds the shared quote corpus.
//!
//! ## Core Concepts
//! - **`ListStore`**: The narrow command surface the service needs (LLEN, RPUSH, DEL, LINDEX, PING).
//!   Seeding, selection and the HTTP handlers only ever see this trait.
//! - **`RedisStore`**: The production implementation. Owns exactly one multiplexed connection
//!   per process; its driver pairs every reply with the command that sent it, even when the
//!   caller has gone away.
//! - **Errors**: `ConnectError` is fatal at startup, `StoreError` is returned by every command.

pub mod client;
pub mod error;
pub mod redis_store;

#[cfg(test)]
pub(crate) mod memory;


pub use client::ListStore;
pub use error::{ConnectError, StoreError};
pub use redis_store::RedisStore;
