//! Memoized fetch cache
//!
//! List views often hang on to slow-changing lookup data next to the
//! listing itself (the viewer's groups, zone metadata). [`MemoCache`]
//! holds one such value behind an explicit lifecycle: fetched at most
//! once while fresh, dropped on [`invalidate`], and expired by TTL when
//! one is configured.
//!
//! [`invalidate`]: MemoCache::invalidate

use crate::error::Result;
use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// A single cached value with an explicit lifecycle
///
/// Reads go through a shared lock, so concurrent callers of
/// [`get_or_fetch`] are cheap once the value is present. When it is
/// missing or stale, callers queue on the write lock and the winner
/// fetches; the rest observe the freshly filled slot and never fetch.
///
/// [`get_or_fetch`]: MemoCache::get_or_fetch
pub struct MemoCache<T> {
    slot: RwLock<Option<CachedValue<T>>>,
    ttl: Option<Duration>,
}

#[derive(Debug, Clone)]
struct CachedValue<T> {
    value: T,
    fetched_at: Instant,
}

impl<T> CachedValue<T> {
    fn is_fresh(&self, ttl: Option<Duration>) -> bool {
        match ttl {
            Some(ttl) => self.fetched_at.elapsed() < ttl,
            None => true,
        }
    }
}

impl<T> MemoCache<T> {
    /// Cache without expiry; the value lives until invalidated
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            ttl: None,
        }
    }

    /// Cache whose value expires `ttl` after it was fetched
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl: Some(ttl),
        }
    }

    /// Drop the cached value, forcing the next caller to fetch
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }
}

impl<T: Clone> MemoCache<T> {
    /// Return the cached value, fetching it if absent or stale
    ///
    /// A failed fetch caches nothing and surfaces the error; the next
    /// caller fetches again.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        // Check for a fresh value under the shared lock
        {
            let slot = self.slot.read().await;
            if let Some(cached) = slot.as_ref() {
                if cached.is_fresh(self.ttl) {
                    return Ok(cached.value.clone());
                }
            }
        }

        let mut slot = self.slot.write().await;

        // Double-check after acquiring the write lock (another task might
        // have fetched)
        if let Some(cached) = slot.as_ref() {
            if cached.is_fresh(self.ttl) {
                return Ok(cached.value.clone());
            }
        }

        let value = fetch().await?;
        *slot = Some(CachedValue {
            value: value.clone(),
            fetched_at: Instant::now(),
        });

        Ok(value)
    }

    /// Current value if present and fresh; never fetches
    pub async fn peek(&self) -> Option<T> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|cached| cached.is_fresh(self.ttl))
            .map(|cached| cached.value.clone())
    }
}

impl<T> Default for MemoCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MemoCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_first_call_fetches_then_memoizes() {
        tokio_test::block_on(async {
            let cache: MemoCache<u32> = MemoCache::new();
            let calls = AtomicUsize::new(0);

            let value = cache
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await
                .unwrap();
            assert_eq!(value, 7);

            let again = cache
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(8)
                })
                .await
                .unwrap();
            assert_eq!(again, 7);
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        tokio_test::block_on(async {
            let cache: MemoCache<u32> = MemoCache::new();
            let calls = AtomicUsize::new(0);

            cache
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(1)
                })
                .await
                .unwrap();
            assert_eq!(cache.peek().await, Some(1));

            cache.invalidate().await;
            assert_eq!(cache.peek().await, None);

            let value = cache
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(2)
                })
                .await
                .unwrap();
            assert_eq!(value, 2);
            assert_eq!(calls.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_ttl_expiry_refetches() {
        tokio_test::block_on(async {
            let cache: MemoCache<u32> = MemoCache::with_ttl(Duration::from_millis(20));
            let calls = AtomicUsize::new(0);

            cache
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(1)
                })
                .await
                .unwrap();
            assert_eq!(cache.peek().await, Some(1));

            std::thread::sleep(Duration::from_millis(40));
            assert_eq!(cache.peek().await, None);

            let value = cache
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(2)
                })
                .await
                .unwrap();
            assert_eq!(value, 2);
            assert_eq!(calls.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_failed_fetch_caches_nothing() {
        tokio_test::block_on(async {
            let cache: MemoCache<u32> = MemoCache::new();

            let err = cache
                .get_or_fetch(|| async { Err(Error::fetch("upstream down")) })
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Fetch failed: upstream down");
            assert_eq!(cache.peek().await, None);

            let value = cache.get_or_fetch(|| async { Ok(5) }).await.unwrap();
            assert_eq!(value, 5);
            assert_eq!(cache.peek().await, Some(5));
        });
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let cache = Arc::new(MemoCache::<u32>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_fetch(|| async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        Ok(42)
                    })
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
