//! Unsplash 리소스 목록 리포지토리
//!
//! 갤러리 캐시가 채워질 때 한 번 호출되는 외부 목록 조회 계층입니다.
//!
//! ```text
//! GET {UNSPLASH_API_URL}/photos?page=1&per_page=30&order_by=popular
//! Authorization: Client-ID {UNSPLASH_ACCESS_KEY}
//! Accept-Version: v1
//! ```

use async_trait::async_trait;

use crate::config::UnsplashSettings;
use crate::domain::dto::unsplash::UnsplashPhoto;
use crate::domain::models::gallery::ResourceDescriptor;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::utils::string_utils::truncate_chars;

/// 목록 조회 조건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub page: u32,
    pub per_page: u32,
    pub order_by: String,
}

/// 외부 리소스 목록 공급자
///
/// 반환 순서가 곧 갤러리 순서입니다. `id`는 캐시가 다시 매깁니다.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    async fn list_resources(&self, query: &ListingQuery) -> AppResult<Vec<ResourceDescriptor>>;
}

pub struct UnsplashResourceRepository {
    client: reqwest::Client,
    settings: UnsplashSettings,
}

impl UnsplashResourceRepository {
    pub fn new(client: reqwest::Client, settings: UnsplashSettings) -> Self {
        Self { client, settings }
    }

    /// 캐시 채움에 사용할 기본 조회 조건 (첫 페이지)
    pub fn default_query(&self) -> ListingQuery {
        ListingQuery {
            page: 1,
            per_page: self.settings.per_page,
            order_by: self.settings.order_by.clone(),
        }
    }
}

#[async_trait]
impl ResourceSource for UnsplashResourceRepository {
    async fn list_resources(&self, query: &ListingQuery) -> AppResult<Vec<ResourceDescriptor>> {
        let url = format!("{}/photos", self.settings.api_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("page", query.page.to_string()),
                ("per_page", query.per_page.to_string()),
                ("order_by", query.order_by.clone()),
            ])
            .header("Authorization", format!("Client-ID {}", self.settings.access_key))
            .header("Accept-Version", "v1")
            .send()
            .await
            .fetch_context("Unsplash 목록 요청 실패")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::FetchFailed(format!(
                "Unsplash 목록 조회 실패 ({}): {}",
                status.as_u16(),
                truncate_chars(&error_text, 200)
            )));
        }

        let photos = response
            .json::<Vec<UnsplashPhoto>>()
            .await
            .fetch_context("Unsplash 목록 응답 파싱 실패")?;

        log::debug!("Unsplash 목록 {}건 수신", photos.len());

        Ok(photos
            .into_iter()
            .enumerate()
            .map(|(index, photo)| photo.into_descriptor(index))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repository(api_url: &str) -> UnsplashResourceRepository {
        UnsplashResourceRepository::new(
            reqwest::Client::new(),
            UnsplashSettings {
                api_url: api_url.to_string(),
                access_key: "test-key".to_string(),
                per_page: 30,
                order_by: "popular".to_string(),
            },
        )
    }

    fn photo_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "width": 800,
            "height": 600,
            "alt_description": "a mountain",
            "urls": {
                "thumb": format!("https://images.example.com/{}/thumb", id),
                "small": format!("https://images.example.com/{}/small", id),
                "regular": format!("https://images.example.com/{}/regular", id)
            }
        })
    }

    #[tokio::test]
    async fn test_list_resources_sends_listing_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "30"))
            .and(query_param("order_by", "popular"))
            .and(header("Authorization", "Client-ID test-key"))
            .and(header("Accept-Version", "v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                photo_json("a"),
                photo_json("b")
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let repo = repository(&server.uri());
        let resources = repo.list_resources(&repo.default_query()).await.unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1].id, 1);
        assert_eq!(resources[1].external_id, "b");
        assert_eq!(resources[0].alt_text.as_deref(), Some("a mountain"));
    }

    #[tokio::test]
    async fn test_list_resources_error_status_is_fetch_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos"))
            .respond_with(ResponseTemplate::new(401).set_body_string("OAuth error: The access token is invalid"))
            .mount(&server)
            .await;

        let repo = repository(&server.uri());
        let result = repo.list_resources(&repo.default_query()).await;

        match result {
            Err(AppError::FetchFailed(message)) => assert!(message.contains("401")),
            other => panic!("Expected FetchFailed, got {:?}", other),
        }
    }
}
