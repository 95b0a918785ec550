//! Random Quote Service Library
//!
//! Serves a random quote from a fixed corpus kept in a shared Redis list, so that
//! every instance of the service answers from the same data and the same indexing.
//! This crate holds the modules the binary (`main.rs`) wires together.
//!
//! ## Architecture Modules
//! - **`store`**: The single long-lived connection to the ordered-list store, behind the
//!   `ListStore` trait.
//! - **`quotes`**: Startup seeding of the shared list, random selection and the HTTP surface.
//! - **`config`**: Command-line flags and environment fallbacks.

pub mod config;
pub mod quotes;
pub mod store;
