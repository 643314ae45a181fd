//! Catalog Service Tests
//!
//! Validates the state-replacement invariant and the cold-start path against a
//! scripted `RecordSource`: a successful load swaps the (records, index) pair
//! as a unit, a failed reload leaves the last-good pair untouched, and
//! simultaneous cold lookups trigger a single fetch.

#[cfg(test)]
mod tests {
    use crate::catalog::service::CatalogService;
    use crate::catalog::types::{ReloadResponse, StatusResponse};
    use crate::index::types::SearchOutcome;
    use crate::loader::fetch::{Loader, RecordSource, RetryPolicy};
    use crate::loader::types::FetchError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Replays a scripted sequence of fetch outcomes and counts attempts.
    /// Once the script runs dry, every further attempt fails with a 410.
    #[derive(Clone)]
    struct ScriptedSource {
        responses: Arc<Mutex<VecDeque<Result<Vec<Value>, FetchError>>>>,
        attempts: Arc<AtomicUsize>,
        delay: Duration,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<Value>, FetchError>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into())),
                attempts: Arc::new(AtomicUsize::new(0)),
                delay: Duration::ZERO,
            }
        }

        fn attempts(&self) -> usize {
            self.attempts.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordSource for ScriptedSource {
        async fn fetch_batch(&self) -> Result<Vec<Value>, FetchError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(FetchError::Status(410)))
        }
    }

    fn no_retry_service(source: ScriptedSource) -> CatalogService<ScriptedSource> {
        // One attempt per load, so each scripted entry is one reload.
        let policy = RetryPolicy {
            max_attempts: 1,
            backoff_base: Duration::from_millis(1),
        };
        CatalogService::new(Loader::with_policy(source, policy))
    }

    fn sample_dataset() -> Vec<Value> {
        vec![
            json!({"name": "apple", "kind": "fruit"}),
            json!({"name": "Banana Split", "kind": "dessert"}),
            json!({"id": 3}),
        ]
    }

    // ============================================================
    // RELOAD
    // ============================================================

    #[tokio::test]
    async fn test_reload_installs_dataset() {
        let source = ScriptedSource::new(vec![Ok(sample_dataset())]);
        let service = no_retry_service(source.clone());

        let count = service.reload().await.expect("reload should succeed");

        assert_eq!(count, 3);
        let status = service.status().await;
        assert!(status.loaded);
        assert!(status.index_ready);
        assert_eq!(status.item_count, 3);
    }

    #[tokio::test]
    async fn test_reload_retries_through_transient_failures() {
        let source = ScriptedSource::new(vec![
            Err(FetchError::Status(503)),
            Err(FetchError::Status(503)),
            Ok(sample_dataset()),
        ]);
        let policy = RetryPolicy {
            max_attempts: 3,
            backoff_base: Duration::from_millis(1),
        };
        let service = CatalogService::new(Loader::with_policy(source.clone(), policy));

        let count = service.reload().await.expect("third attempt succeeds");

        assert_eq!(count, 3);
        assert_eq!(source.attempts(), 3);
        assert!(service.status().await.loaded);
    }

    #[tokio::test]
    async fn test_failed_reload_preserves_previous_state() {
        let source =
            ScriptedSource::new(vec![Ok(sample_dataset()), Err(FetchError::Status(500))]);
        let service = no_retry_service(source.clone());

        service.reload().await.expect("first reload succeeds");
        let err = service.reload().await.expect_err("second reload fails");
        assert!(matches!(err, FetchError::Status(500)));

        // The last-good pair stays installed and the flag stays truthful.
        let status = service.status().await;
        assert!(status.loaded);
        assert_eq!(status.item_count, 3);
        match service.search("apple").await.unwrap() {
            SearchOutcome::Exact(record) => assert_eq!(record["kind"], "fruit"),
            other => panic!("Expected exact match from stale index, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cold_failure_leaves_empty_state() {
        let source = ScriptedSource::new(vec![Err(FetchError::Status(500))]);
        let service = no_retry_service(source.clone());

        assert!(service.reload().await.is_err());

        let status = service.status().await;
        assert!(!status.loaded);
        assert!(!status.index_ready);
        assert_eq!(status.item_count, 0);
        assert_eq!(service.sample(10).await, (0, vec![]));
    }

    #[tokio::test]
    async fn test_reload_replaces_dataset_wholesale() {
        let source = ScriptedSource::new(vec![
            Ok(sample_dataset()),
            Ok(vec![json!({"name": "cherry"})]),
        ]);
        let service = no_retry_service(source.clone());

        service.reload().await.unwrap();
        service.reload().await.unwrap();

        assert_eq!(service.status().await.item_count, 1);
        // Old entries are gone, not merged.
        assert_eq!(
            service.search("apple").await.unwrap(),
            SearchOutcome::NotFound
        );
        assert!(matches!(
            service.search("cherry").await.unwrap(),
            SearchOutcome::Exact(_)
        ));
    }

    // ============================================================
    // COLD-START LOOKUPS
    // ============================================================

    #[tokio::test]
    async fn test_cold_search_loads_once_then_serves_from_memory() {
        let source = ScriptedSource::new(vec![Ok(sample_dataset())]);
        let service = no_retry_service(source.clone());

        let outcome = service.search("apple").await.unwrap();
        assert!(matches!(outcome, SearchOutcome::Exact(_)));
        assert_eq!(source.attempts(), 1);

        // Further lookups, found or not, never refetch.
        assert_eq!(
            service.search("zzz_no_such_thing").await.unwrap(),
            SearchOutcome::NotFound
        );
        assert_eq!(source.attempts(), 1);
    }

    #[tokio::test]
    async fn test_cold_search_failure_surfaces_then_recovers() {
        let source =
            ScriptedSource::new(vec![Err(FetchError::Status(502)), Ok(sample_dataset())]);
        let service = no_retry_service(source.clone());

        assert!(service.search("apple").await.is_err());
        assert!(!service.status().await.loaded);

        // An explicit reload afterwards recovers the service.
        service.reload().await.expect("reload should succeed");
        assert!(matches!(
            service.search("apple").await.unwrap(),
            SearchOutcome::Exact(_)
        ));
    }

    #[tokio::test]
    async fn test_concurrent_cold_searches_fetch_once() {
        let mut source = ScriptedSource::new(vec![Ok(sample_dataset())]);
        source.delay = Duration::from_millis(20);
        let service = Arc::new(no_retry_service(source.clone()));

        let left = {
            let service = service.clone();
            tokio::spawn(async move { service.search("apple").await })
        };
        let right = {
            let service = service.clone();
            tokio::spawn(async move { service.search("banana split").await })
        };

        assert!(left.await.unwrap().is_ok());
        assert!(right.await.unwrap().is_ok());
        // The gate's double-check collapses the two cold loads into one fetch.
        assert_eq!(source.attempts(), 1);
    }

    // ============================================================
    // LISTING
    // ============================================================

    #[tokio::test]
    async fn test_sample_counts_all_but_names_only_named() {
        let source = ScriptedSource::new(vec![Ok(sample_dataset())]);
        let service = no_retry_service(source.clone());
        service.reload().await.unwrap();

        let (total, names) = service.sample(10).await;

        // The nameless record counts toward the total but yields no sample.
        assert_eq!(total, 3);
        assert_eq!(names, vec!["apple", "Banana Split"]);
    }

    #[tokio::test]
    async fn test_sample_never_triggers_load() {
        let source = ScriptedSource::new(vec![Ok(sample_dataset())]);
        let service = no_retry_service(source.clone());

        let (total, names) = service.sample(10).await;

        assert_eq!(total, 0);
        assert!(names.is_empty());
        assert_eq!(source.attempts(), 0);
    }

    // ============================================================
    // API TYPES
    // ============================================================

    #[test]
    fn test_status_response_serialization() {
        let response = StatusResponse {
            data_loaded: true,
            item_count: 42,
            trie_initialized: true,
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: StatusResponse = serde_json::from_str(&json).unwrap();

        assert!(json.contains("data_loaded"));
        assert!(json.contains("trie_initialized"));
        assert!(restored.data_loaded);
        assert_eq!(restored.item_count, 42);
    }

    #[test]
    fn test_reload_response_serialization() {
        let response = ReloadResponse {
            message: "Data reloaded successfully. 7 items loaded.".to_string(),
            count: 7,
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: ReloadResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.count, 7);
        assert!(restored.message.contains("7 items"));
    }
}
