use serde::{Deserialize, Serialize};

/// 크기별 이미지 URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUrls {
    pub thumb: String,
    pub small: String,
    pub regular: String,
}

impl ResourceUrls {
    /// 플레이스홀더용으로 가장 작은 변형을 고릅니다. `small`이 비어 있으면 `thumb`, `regular` 순입니다.
    pub fn smallest_available(&self) -> Option<&str> {
        [&self.small, &self.thumb, &self.regular]
            .into_iter()
            .map(|url| url.trim())
            .find(|url| !url.is_empty())
    }
}

/// 갤러리에 표시되는 리소스 한 건
///
/// `id`는 캐시를 채울 때마다 새로 매겨지는 0부터의 순번이고,
/// 외부에서 안정적으로 쓸 수 있는 키는 `external_id`입니다.
/// `blur_data_url`은 렌더링용 복사본에만 채워집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub id: usize,
    pub external_id: String,
    pub width: u32,
    pub height: u32,
    pub urls: ResourceUrls,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_data_url: Option<String>,
}

impl ResourceDescriptor {
    pub fn with_blur(mut self, blur_data_url: String) -> Self {
        self.blur_data_url = Some(blur_data_url);
        self
    }
}
