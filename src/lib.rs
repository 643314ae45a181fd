//! Catalog Search Service Library
//!
//! This library crate defines the core modules of the catalog search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`loader`**: The data acquisition layer. Fetches the raw record set from the
//!   external provider over HTTP with bounded retries and exponential backoff.
//! - **`index`**: The core information retrieval logic. Builds the name index from
//!   a raw record set and answers lookups through a cascading match policy
//!   (exact, then prefix, then substring).
//! - **`catalog`**: The stateful service layer. Owns the current (record set, index)
//!   pair behind a lock, coordinates reloads, and exposes the HTTP API handlers.

pub mod catalog;
pub mod index;
pub mod loader;
