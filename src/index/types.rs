use serde_json::Value;

/// Result of a lookup cascade.
///
/// `NotFound` is an ordinary outcome, not an error: the HTTP layer maps it to a
/// 404 body rather than a fault.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The normalized query matched a key exactly; the single associated record.
    Exact(Value),
    /// Prefix or substring matches, capped at `MAX_RESULTS`, in cascade order.
    Matches(Vec<Value>),
    /// No strategy produced a result.
    NotFound,
}
