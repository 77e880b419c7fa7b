//! 원격 이미지 바이트 조회 리포지토리

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};

/// URL로 이미지 바이트를 가져오는 협력자
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_image(&self, url: &str) -> AppResult<Vec<u8>>;
}

pub struct HttpImageRepository {
    client: reqwest::Client,
}

impl HttpImageRepository {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageRepository {
    async fn fetch_image(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::FetchFailed(format!("이미지 요청 실패 {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailed(format!(
                "이미지 조회 실패 {}: HTTP {}",
                url,
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::FetchFailed(format!("이미지 본문 읽기 실패 {}: {}", url, e)))?;

        Ok(bytes.to_vec())
    }
}
