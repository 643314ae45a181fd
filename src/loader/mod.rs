//! Data Loader Module
//!
//! Handles the acquisition of the raw record set from the external provider.
//!
//! ## Workflow
//! 1. **Fetch**: Issues an HTTP GET against the configured dataset URL with a
//!    request timeout and a browser-like User-Agent header.
//! 2. **Validate**: Accepts only a 200 response whose body parses as a JSON array;
//!    anything else counts as a single failed attempt.
//! 3. **Retry**: Repeats failed attempts up to the configured maximum, sleeping
//!    with exponential backoff between attempts.
//!
//! Only the aggregate success or failure of a load is visible to callers; the
//! individual attempt errors are logged and folded into the final result.
//!
//! ## Submodules
//! - **`fetch`**: The `RecordSource` seam, the HTTP implementation, and the retry loop.
//! - **`types`**: The fetch error taxonomy.

pub mod fetch;
pub mod types;
