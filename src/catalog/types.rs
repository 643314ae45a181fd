//! Catalog API Data Types
//!
//! DTOs for the HTTP boundary. Field names mirror the public API shape
//! (`data_loaded`, `trie_initialized`, ...) rather than internal naming.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Defaults to the empty string, which matches everything as a prefix.
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

/// One listing entry: the record projected to just its name.
#[derive(Debug, Serialize, Deserialize)]
pub struct NameSample {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListItemsResponse {
    pub total_items: usize,
    pub samples: Vec<NameSample>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub message: String,
    pub count: usize,
}

/// Load-state report. `trie_initialized` keeps the historical field name;
/// it is true once an index has been built from a successful fetch.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub data_loaded: bool,
    pub item_count: usize,
    pub trie_initialized: bool,
}

/// Body for every failure-equivalent and not-found response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
