//! 갤러리 서비스
//!
//! 리소스 캐시와 플레이스홀더 생성기를 묶어 HTTP 계층에 제공합니다.

use std::sync::Arc;

use crate::domain::models::gallery::ResourceDescriptor;
use crate::errors::{AppError, AppResult};
use crate::services::gallery::placeholder_generator::PlaceholderGenerator;
use crate::services::gallery::resource_cache::ResourceCache;

pub struct GalleryService {
    cache: Arc<ResourceCache>,
    placeholders: PlaceholderGenerator,
}

impl GalleryService {
    pub fn new(cache: Arc<ResourceCache>, placeholders: PlaceholderGenerator) -> Self {
        Self { cache, placeholders }
    }

    /// 캐시된 목록 전체를 플레이스홀더와 함께 반환합니다.
    pub async fn gallery(&self) -> Vec<ResourceDescriptor> {
        let resources = self.cache.fetch_once().await;
        self.placeholders.enrich_all(&resources).await
    }

    /// 이번 채움 기준 `id`에 해당하는 리소스 하나를 반환합니다.
    pub async fn image(&self, id: usize) -> AppResult<ResourceDescriptor> {
        let resources = self.cache.fetch_once().await;
        let descriptor = resources
            .iter()
            .find(|resource| resource.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("이미지 id {}", id)))?;

        match self.placeholders.generate(&descriptor).await {
            Ok(blur) => Ok(descriptor.with_blur(blur)),
            Err(e) => {
                log::warn!("플레이스홀더 생성 실패 (id={}): {}", id, e);
                Ok(descriptor)
            }
        }
    }
}
