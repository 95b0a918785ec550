//! Quote Service Module
//!
//! Everything between the list store and the HTTP client.
//!
//! ## Overview
//! At startup the `seeder` makes the shared list match the compiled-in `corpus`.
//! While serving, the `selector` draws a random index against the length the store
//! currently reports and the `handlers` expose it over HTTP together with a health probe.
//!
//! ## Submodules
//! - **`corpus`**: The compiled-in quotes and the key they are persisted under.
//! - **`seeder`**: Idempotent startup reconciliation of the persisted list.
//! - **`selector`**: Uniform random pick over the persisted list.
//! - **`handlers`**: Axum router and request handlers.
//! - **`types`**: Response DTOs and selection errors.

pub mod corpus;
pub mod handlers;
pub mod seeder;
pub mod selector;
pub mod types;
