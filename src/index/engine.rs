use super::types::SearchOutcome;
use serde_json::Value;
use std::collections::BTreeMap;

/// Cap on prefix and substring result lists.
pub const MAX_RESULTS: usize = 10;

/// Returns the record's `name` field, if it is a string.
pub fn record_name(record: &Value) -> Option<&str> {
    record.get("name").and_then(Value::as_str)
}

/// Ordered mapping from lower-cased name to record.
///
/// A `BTreeMap` gives both operations the cascade needs: exact key lookup and
/// ordered prefix enumeration via `range`. Records without a non-empty string
/// `name` are not indexed; they stay visible in the raw record set only.
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    entries: BTreeMap<String, Value>,
}

impl NameIndex {
    /// Builds a fresh index from a record set. If several records normalize to
    /// the same key, the last one in source order wins.
    pub fn build(records: &[Value]) -> Self {
        let mut entries = BTreeMap::new();
        for record in records {
            if let Some(name) = record_name(record) {
                if !name.is_empty() {
                    entries.insert(name.to_lowercase(), record.clone());
                }
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup on an already-normalized key.
    pub fn exact(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Records whose key starts with `prefix`, in ascending key order,
    /// capped at `limit`.
    pub fn prefix_matches(&self, prefix: &str, limit: usize) -> Vec<Value> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .take(limit)
            .map(|(_, record)| record.clone())
            .collect()
    }
}

/// Resolves a query through the match cascade: exact, then prefix, then a
/// substring scan over the raw record set in source order. The empty query is
/// a prefix of every key, so it yields the first `MAX_RESULTS` records rather
/// than a special case.
pub fn lookup(index: &NameIndex, records: &[Value], query: &str) -> SearchOutcome {
    let needle = query.to_lowercase();

    if let Some(record) = index.exact(&needle) {
        return SearchOutcome::Exact(record.clone());
    }

    let prefixed = index.prefix_matches(&needle, MAX_RESULTS);
    if !prefixed.is_empty() {
        return SearchOutcome::Matches(prefixed);
    }

    let mut partial = Vec::new();
    for record in records {
        if let Some(name) = record_name(record) {
            if name.to_lowercase().contains(&needle) {
                partial.push(record.clone());
                if partial.len() == MAX_RESULTS {
                    break;
                }
            }
        }
    }

    if partial.is_empty() {
        SearchOutcome::NotFound
    } else {
        SearchOutcome::Matches(partial)
    }
}

/// Names of the first `limit` records (source order) that carry a non-empty
/// name, for the listing endpoint.
pub fn sample_names(records: &[Value], limit: usize) -> Vec<String> {
    records
        .iter()
        .take(limit)
        .filter_map(record_name)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
