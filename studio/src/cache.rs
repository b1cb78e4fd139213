//! Per-table row cache
//!
//! Caches pagination windows of raw rows keyed by (table, offset, limit).
//! A successful mutation against a table invalidates every window of that
//! table, forcing the next read to re-fetch.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tabula_link::TabulaClient;
use tokio::sync::Mutex;

use crate::error::Result;

/// Default pagination window used by the grid view.
pub const DEFAULT_OFFSET: usize = 0;
pub const DEFAULT_LIMIT: usize = 100;

/// Source of raw rows for a pagination window.
///
/// Implemented by [`TabulaClient`]; tests substitute scripted fakes.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(
        &self,
        table_name: &str,
        offset: usize,
        limit: usize,
    ) -> tabula_link::Result<Vec<Vec<String>>>;
}

#[async_trait]
impl RowSource for TabulaClient {
    async fn fetch_rows(
        &self,
        table_name: &str,
        offset: usize,
        limit: usize,
    ) -> tabula_link::Result<Vec<Vec<String>>> {
        TabulaClient::fetch_rows(self, table_name, offset, limit).await
    }
}

type CacheKey = (String, usize, usize);

/// Paginated row cache with explicit invalidation.
pub struct TableDataCache<S> {
    source: S,
    windows: Mutex<HashMap<CacheKey, Vec<Vec<String>>>>,
}

impl<S: RowSource> TableDataCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached window or fetch it from the source.
    ///
    /// Idempotent: with unchanged backend state and no intervening
    /// [`invalidate`](Self::invalidate), repeated calls return the same
    /// rows without a second network round trip. A fetch failure leaves
    /// the cache untouched.
    pub async fn get_rows(
        &self,
        table_name: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Vec<String>>> {
        let key = (table_name.to_string(), offset, limit);

        {
            let windows = self.windows.lock().await;
            if let Some(rows) = windows.get(&key) {
                debug!(
                    "[CACHE] Hit for table={} offset={} limit={}",
                    table_name, offset, limit
                );
                return Ok(rows.clone());
            }
        }

        debug!(
            "[CACHE] Miss for table={} offset={} limit={}, fetching",
            table_name, offset, limit
        );
        let rows = self.source.fetch_rows(table_name, offset, limit).await?;

        let mut windows = self.windows.lock().await;
        windows.insert(key, rows.clone());
        Ok(rows)
    }

    /// Fetch the grid view's default window.
    pub async fn get_default_window(&self, table_name: &str) -> Result<Vec<Vec<String>>> {
        self.get_rows(table_name, DEFAULT_OFFSET, DEFAULT_LIMIT).await
    }

    /// Drop every cached window for the table, regardless of offset/limit.
    pub async fn invalidate(&self, table_name: &str) {
        let mut windows = self.windows.lock().await;
        let before = windows.len();
        windows.retain(|(table, _, _), _| table != table_name);
        debug!(
            "[CACHE] Invalidated {} window(s) for table={}",
            before - windows.len(),
            table_name
        );
    }

    /// Number of cached windows (all tables).
    pub async fn window_count(&self) -> usize {
        self.windows.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CountingSource {
        fetches: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RowSource for CountingSource {
        async fn fetch_rows(
            &self,
            table_name: &str,
            offset: usize,
            _limit: usize,
        ) -> tabula_link::Result<Vec<Vec<String>>> {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![vec![
                table_name.to_string(),
                offset.to_string(),
                format!("fetch-{}", n),
            ]])
        }
    }

    #[tokio::test]
    async fn test_get_rows_is_idempotent() {
        let source = CountingSource::default();
        let fetches = source.fetches.clone();
        let cache = TableDataCache::new(source);

        let first = cache.get_rows("users", 0, 100).await.unwrap();
        let second = cache.get_rows("users", 0, 100).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        // The default window is the same key as an explicit (0, 100)
        let third = cache.get_default_window("users").await.unwrap();
        assert_eq!(first, third);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let source = CountingSource::default();
        let fetches = source.fetches.clone();
        let cache = TableDataCache::new(source);

        cache.get_rows("users", 0, 100).await.unwrap();
        cache.invalidate("users").await;
        cache.get_rows("users", 0, 100).await.unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_drops_all_windows_of_table() {
        let source = CountingSource::default();
        let cache = TableDataCache::new(source);

        cache.get_rows("users", 0, 100).await.unwrap();
        cache.get_rows("users", 100, 100).await.unwrap();
        cache.get_rows("orders", 0, 100).await.unwrap();
        assert_eq!(cache.window_count().await, 3);

        cache.invalidate("users").await;
        assert_eq!(cache.window_count().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_windows_are_cached_separately() {
        let source = CountingSource::default();
        let fetches = source.fetches.clone();
        let cache = TableDataCache::new(source);

        let a = cache.get_rows("users", 0, 100).await.unwrap();
        let b = cache.get_rows("users", 100, 100).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    struct FailingSource;

    #[async_trait]
    impl RowSource for FailingSource {
        async fn fetch_rows(
            &self,
            _table_name: &str,
            _offset: usize,
            _limit: usize,
        ) -> tabula_link::Result<Vec<Vec<String>>> {
            Err(tabula_link::LinkError::NetworkError("down".into()))
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_cache_untouched() {
        let cache = TableDataCache::new(FailingSource);
        assert!(cache.get_rows("users", 0, 100).await.is_err());
        assert_eq!(cache.window_count().await, 0);
    }
}
