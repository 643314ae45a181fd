//! Catalog Service Module
//!
//! The stateful heart of the service: owns the current (raw record set, name
//! index, loaded flag) triple and coordinates its replacement.
//!
//! ## Responsibilities
//! - **State**: Holds the last successfully loaded dataset behind a read/write
//!   lock; the pair is always swapped together, never piecewise.
//! - **Reload**: Serializes fetch-and-rebuild sequences through a gate so
//!   concurrent triggers cannot interleave, while readers keep serving the
//!   last-good snapshot.
//! - **Cold start**: An explicit `ensure_loaded` check lets the lookup path
//!   attempt exactly one synchronous load before answering.
//! - **API**: Exposes search, listing, reload, and status over HTTP via Axum.
//!
//! ## Submodules
//! - **`service`**: The `CatalogService` state owner.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
