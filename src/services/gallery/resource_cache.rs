//! # 리소스 캐시 (single-flight, fill-once)
//!
//! 외부 목록을 프로세스 수명 동안 한 번만 가져와 보관합니다.
//!
//! ## 동시성 규칙
//!
//! - 채워진 목록은 `RwLock<Option<Arc<[_]>>>`에 통째로 교체되므로 읽는 쪽은 항상 완성된 목록만 봅니다.
//! - 채움은 `tokio::sync::Mutex` 게이트 하나로 직렬화되어 외부 호출은 동시에 최대 한 건입니다.
//! - 게이트를 기다리던 사이에 채움이 실패했다면 대기자들은 빈 목록을 받고 돌아갑니다.
//!   다음 호출이 다시 시도합니다.
//! - 실패하거나 빈 응답은 캐시를 채우지 않습니다.
//! - 채우던 호출이 취소되면 아무것도 기록되지 않고 게이트만 풀립니다.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;

use crate::domain::models::gallery::ResourceDescriptor;
use crate::repositories::resources::{ListingQuery, ResourceSource};

pub struct ResourceCache {
    source: Arc<dyn ResourceSource>,
    query: ListingQuery,
    filled: RwLock<Option<Arc<[ResourceDescriptor]>>>,
    fill_gate: Mutex<()>,
    failed_fills: AtomicU64,
}

impl ResourceCache {
    pub fn new(source: Arc<dyn ResourceSource>, query: ListingQuery) -> Self {
        Self {
            source,
            query,
            filled: RwLock::new(None),
            fill_gate: Mutex::new(()),
            failed_fills: AtomicU64::new(0),
        }
    }

    /// 채워진 목록을 반환하고, 아직 없으면 한 번 가져옵니다.
    ///
    /// 실패 시 빈 목록을 반환합니다.
    pub async fn fetch_once(&self) -> Arc<[ResourceDescriptor]> {
        if let Some(filled) = self.filled() {
            return filled;
        }

        let failures_before = self.failed_fills.load(Ordering::Acquire);
        let _gate = self.fill_gate.lock().await;

        if let Some(filled) = self.filled() {
            return filled;
        }

        if self.failed_fills.load(Ordering::Acquire) != failures_before {
            log::debug!("리소스 캐시 채움이 방금 실패하여 빈 목록을 반환합니다");
            return empty();
        }

        match self.source.list_resources(&self.query).await {
            Ok(resources) if !resources.is_empty() => {
                let sequence: Arc<[ResourceDescriptor]> = resources
                    .into_iter()
                    .enumerate()
                    .map(|(index, mut resource)| {
                        resource.id = index;
                        resource.blur_data_url = None;
                        resource
                    })
                    .collect();

                self.store(sequence.clone());
                log::info!("✅ 리소스 캐시 채움 완료: {}건", sequence.len());
                sequence
            }
            Ok(_) => {
                log::warn!("리소스 목록이 비어 있어 캐시를 채우지 않습니다");
                self.failed_fills.fetch_add(1, Ordering::AcqRel);
                empty()
            }
            Err(e) => {
                log::error!("리소스 목록 조회 실패: {}", e);
                self.failed_fills.fetch_add(1, Ordering::AcqRel);
                empty()
            }
        }
    }

    pub fn is_filled(&self) -> bool {
        self.filled().is_some()
    }

    /// 캐시를 비웁니다. 테스트 격리용입니다.
    #[cfg(test)]
    pub fn reset(&self) {
        match self.filled.write() {
            Ok(mut filled) => *filled = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    fn filled(&self) -> Option<Arc<[ResourceDescriptor]>> {
        match self.filled.read() {
            Ok(filled) => filled.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store(&self, sequence: Arc<[ResourceDescriptor]>) {
        match self.filled.write() {
            Ok(mut filled) => *filled = Some(sequence),
            Err(poisoned) => *poisoned.into_inner() = Some(sequence),
        }
    }
}

fn empty() -> Arc<[ResourceDescriptor]> {
    Arc::from(Vec::new())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::models::gallery::ResourceUrls;
    use crate::errors::{AppError, AppResult};

    pub fn descriptor(external_id: &str, base_url: &str) -> ResourceDescriptor {
        ResourceDescriptor {
            id: 99,
            external_id: external_id.to_string(),
            width: 800,
            height: 600,
            urls: ResourceUrls {
                thumb: format!("{}/{}/thumb", base_url, external_id),
                small: format!("{}/{}/small", base_url, external_id),
                regular: format!("{}/{}/regular", base_url, external_id),
            },
            alt_text: None,
            blur_data_url: None,
        }
    }

    /// 호출 횟수를 세고, 미리 정한 순서대로 응답하는 목록 공급자
    pub struct CountingSource {
        pub calls: AtomicUsize,
        responses: std::sync::Mutex<Vec<AppResult<Vec<ResourceDescriptor>>>>,
        delay: Duration,
    }

    impl CountingSource {
        /// `responses`는 호출 순서대로 소비되며, 마지막 응답은 계속 반복됩니다.
        pub fn new(responses: Vec<AppResult<Vec<ResourceDescriptor>>>, delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                responses: std::sync::Mutex::new(responses),
                delay,
            }
        }

        pub fn with_ids(ids: &[&str]) -> Self {
            let resources = ids.iter().map(|id| descriptor(id, "https://img.test")).collect();
            Self::new(vec![Ok(resources)], Duration::from_millis(50))
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResourceSource for CountingSource {
        async fn list_resources(&self, _query: &ListingQuery) -> AppResult<Vec<ResourceDescriptor>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;

            let mut responses = self.responses.lock().unwrap();
            if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses
                    .first()
                    .cloned()
                    .unwrap_or_else(|| Err(AppError::FetchFailed("no response".to_string())))
            }
        }
    }

    pub fn query() -> ListingQuery {
        ListingQuery {
            page: 1,
            per_page: 30,
            order_by: "popular".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::test_support::*;
    use super::*;
    use crate::errors::AppError;

    fn ids(resources: &[ResourceDescriptor]) -> Vec<(usize, String)> {
        resources.iter().map(|r| (r.id, r.external_id.clone())).collect()
    }

    #[tokio::test]
    async fn test_overlapping_first_calls_share_one_fetch() {
        let source = Arc::new(CountingSource::with_ids(&["a", "b", "c"]));
        let cache = ResourceCache::new(source.clone(), query());

        let (first, second) = tokio::join!(cache.fetch_once(), cache.fetch_once());

        assert_eq!(source.call_count(), 1);
        assert_eq!(first.len(), 3);
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_many_concurrent_callers_observe_identical_ids() {
        let source = Arc::new(CountingSource::with_ids(&["a", "b", "c", "d"]));
        let cache = Arc::new(ResourceCache::new(source.clone(), query()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.fetch_once().await })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        assert_eq!(source.call_count(), 1);
        for result in &results {
            assert_eq!(ids(result), ids(&results[0]));
        }
    }

    #[tokio::test]
    async fn test_filled_cache_is_reused() {
        let source = Arc::new(CountingSource::with_ids(&["a"]));
        let cache = ResourceCache::new(source.clone(), query());

        cache.fetch_once().await;
        cache.fetch_once().await;
        cache.fetch_once().await;

        assert_eq!(source.call_count(), 1);
        assert!(cache.is_filled());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried() {
        let source = Arc::new(CountingSource::new(
            vec![
                Err(AppError::FetchFailed("503".to_string())),
                Ok(vec![descriptor("a", "https://img.test")]),
            ],
            Duration::from_millis(1),
        ));
        let cache = ResourceCache::new(source.clone(), query());

        assert!(cache.fetch_once().await.is_empty());
        assert!(!cache.is_filled());

        let retried = cache.fetch_once().await;
        assert_eq!(retried.len(), 1);
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_listing_does_not_fill() {
        let source = Arc::new(CountingSource::new(
            vec![Ok(vec![]), Ok(vec![descriptor("a", "https://img.test")])],
            Duration::from_millis(1),
        ));
        let cache = ResourceCache::new(source.clone(), query());

        assert!(cache.fetch_once().await.is_empty());
        assert_eq!(cache.fetch_once().await.len(), 1);
    }

    #[tokio::test]
    async fn test_waiters_behind_failed_fill_do_not_stampede() {
        let source = Arc::new(CountingSource::new(
            vec![
                Err(AppError::FetchFailed("timeout".to_string())),
                Ok(vec![descriptor("a", "https://img.test")]),
            ],
            Duration::from_millis(50),
        ));
        let cache = ResourceCache::new(source.clone(), query());

        let (first, second) = tokio::join!(cache.fetch_once(), cache.fetch_once());

        assert!(first.is_empty());
        assert!(second.is_empty());
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_fill_leaves_cache_unfilled() {
        let source = Arc::new(CountingSource::with_ids(&["a"]));
        let cache = ResourceCache::new(source.clone(), query());

        let cancelled = tokio::time::timeout(Duration::from_millis(5), cache.fetch_once()).await;
        assert!(cancelled.is_err());
        assert!(!cache.is_filled());

        assert_eq!(cache.fetch_once().await.len(), 1);
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_reset_forces_refill_with_fresh_ids() {
        let source = Arc::new(CountingSource::with_ids(&["a", "b"]));
        let cache = ResourceCache::new(source.clone(), query());

        cache.fetch_once().await;
        cache.reset();
        assert!(!cache.is_filled());

        let refilled = cache.fetch_once().await;
        assert_eq!(refilled.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(source.call_count(), 2);
    }
}
