//! Search Index Module
//!
//! The core component answering lookups against the loaded record set.
//!
//! ## Overview
//! Builds an ordered mapping from lower-cased record names to records, then
//! resolves queries through a cascade of match strategies, stopping at the
//! first one that produces results:
//!
//! 1. **Exact**: the normalized query is a key in the index.
//! 2. **Prefix**: all keys starting with the query, in ascending key order.
//! 3. **Substring**: a scan of the raw record set for names containing the query.
//!
//! The index is rebuilt wholesale from each successfully fetched record set and
//! never mutated in place.
//!
//! ## Submodules
//! - **`engine`**: Index construction, the lookup cascade, and listing helpers.
//! - **`types`**: The lookup outcome type.

pub mod engine;
pub mod types;
