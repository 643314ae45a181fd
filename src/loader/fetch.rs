use super::types::FetchError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Per-request timeout on the upstream GET.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Some hosts reject requests without a browser-like User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// A provider of the raw record set. One call is one fetch attempt;
/// retrying is the `Loader`'s job.
#[async_trait]
pub trait RecordSource: Send + Sync + 'static {
    async fn fetch_batch(&self) -> Result<Vec<Value>, FetchError>;
}

/// Production source: HTTP GET against a fixed dataset URL.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch_batch(&self) -> Result<Vec<Value>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str::<Vec<Value>>(&body).map_err(FetchError::Parse)
    }
}

/// Retry parameters for a full load.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_secs(1),
        }
    }
}

/// Delay before the attempt following failed attempt `attempt` (numbered from 0):
/// `backoff_base * 2^attempt`, so 1, 2, 4 base-units.
pub fn backoff_delay(attempt: u32, base: Duration) -> Duration {
    base * 2u32.pow(attempt)
}

/// Wraps a `RecordSource` with the bounded-retry policy.
pub struct Loader<S> {
    source: S,
    policy: RetryPolicy,
}

impl<S: RecordSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self::with_policy(source, RetryPolicy::default())
    }

    pub fn with_policy(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    /// Runs fetch attempts until one succeeds or the policy is exhausted,
    /// sleeping with exponential backoff between attempts. No sleep before
    /// the first attempt. Returns the last attempt's error on total failure.
    pub async fn load(&self) -> Result<Vec<Value>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.source.fetch_batch().await {
                Ok(records) => {
                    tracing::info!(
                        "Fetched {} records on attempt {}",
                        records.len(),
                        attempt + 1
                    );
                    return Ok(records);
                }
                Err(err) if attempt + 1 < self.policy.max_attempts => {
                    let delay = backoff_delay(attempt, self.policy.backoff_base);
                    tracing::warn!(
                        "Fetch attempt {} failed: {}. Retrying in {:?}",
                        attempt + 1,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::error!("Fetch failed after {} attempts: {}", attempt + 1, err);
                    return Err(err);
                }
            }
        }
    }
}
