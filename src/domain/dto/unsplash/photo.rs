//! Unsplash `GET /photos` 응답 DTO

use serde::Deserialize;

use crate::domain::models::gallery::{ResourceDescriptor, ResourceUrls};
use crate::utils::string_utils::clean_optional_string;

#[derive(Debug, Clone, Deserialize)]
pub struct UnsplashPhotoUrls {
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub regular: String,
}

/// 목록 응답의 사진 한 건. 사용하지 않는 필드는 무시합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct UnsplashPhoto {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub urls: UnsplashPhotoUrls,

    #[serde(default)]
    pub alt_description: Option<String>,
}

impl UnsplashPhoto {
    /// 목록에서의 위치를 `id`로 부여해 디스크립터로 변환합니다.
    pub fn into_descriptor(self, index: usize) -> ResourceDescriptor {
        ResourceDescriptor {
            id: index,
            external_id: self.id,
            width: self.width,
            height: self.height,
            urls: ResourceUrls {
                thumb: self.urls.thumb,
                small: self.urls.small,
                regular: self.urls.regular,
            },
            alt_text: clean_optional_string(self.alt_description),
            blur_data_url: None,
        }
    }
}
