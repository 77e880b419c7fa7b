//! # 블러 플레이스홀더 생성기
//!
//! 리소스의 가장 작은 이미지 변형을 받아 가로 8px로 줄이고,
//! JPEG(품질 70)로 인코딩해 `data:image/jpeg;base64,...` URL을 만듭니다.
//!
//! 디코딩과 인코딩은 CPU 작업이므로 `spawn_blocking`에서 수행합니다.
//! 목록 전체를 처리할 때는 동시 처리 수를 제한하고, 실패한 항목은
//! `blur_data_url` 없이 그대로 둡니다.

use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures_util::stream::{self, StreamExt};
use image::ImageReader;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::domain::models::gallery::ResourceDescriptor;
use crate::errors::{AppError, AppResult};
use crate::repositories::images::ImageFetcher;

/// 플레이스홀더 가로 픽셀 수
pub const BLUR_WIDTH: u32 = 8;
pub const JPEG_QUALITY: u8 = 70;

pub struct PlaceholderGenerator {
    fetcher: Arc<dyn ImageFetcher>,
    concurrency: usize,
}

impl PlaceholderGenerator {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, concurrency: usize) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
        }
    }

    /// 리소스 하나의 블러 data URL을 만듭니다.
    pub async fn generate(&self, descriptor: &ResourceDescriptor) -> AppResult<String> {
        let url = descriptor.urls.smallest_available().ok_or_else(|| {
            AppError::PlaceholderUnavailable(format!(
                "리소스 {}에 이미지 URL이 없습니다",
                descriptor.external_id
            ))
        })?;

        let bytes = self.fetcher.fetch_image(url).await.map_err(|e| {
            AppError::PlaceholderUnavailable(format!("{}: {}", descriptor.external_id, e))
        })?;

        tokio::task::spawn_blocking(move || encode_blur_data_url(&bytes))
            .await
            .map_err(|e| AppError::PlaceholderUnavailable(format!("인코딩 작업 중단: {}", e)))?
    }

    /// 목록의 복사본마다 플레이스홀더를 채워 순서대로 반환합니다.
    pub async fn enrich_all(&self, descriptors: &[ResourceDescriptor]) -> Vec<ResourceDescriptor> {
        stream::iter(descriptors.iter().cloned())
            .map(|descriptor| async move {
                match self.generate(&descriptor).await {
                    Ok(blur) => descriptor.with_blur(blur),
                    Err(e) => {
                        log::warn!("플레이스홀더 생성 실패: {}", e);
                        descriptor
                    }
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}

/// 이미지 바이트를 블러 data URL로 변환합니다.
pub fn encode_blur_data_url(bytes: &[u8]) -> AppResult<String> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AppError::PlaceholderUnavailable(format!("이미지 형식 판별 실패: {}", e)))?
        .decode()
        .map_err(|e| AppError::PlaceholderUnavailable(format!("이미지 디코딩 실패: {}", e)))?;

    let (width, height) = (image.width().max(1), image.height());
    let target_height = ((u64::from(height) * u64::from(BLUR_WIDTH)) / u64::from(width)).max(1) as u32;

    let small = image
        .resize_exact(BLUR_WIDTH, target_height, FilterType::Triangle)
        .to_rgb8();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode_image(&small)
        .map_err(|e| AppError::PlaceholderUnavailable(format!("JPEG 인코딩 실패: {}", e)))?;

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    /// URL별로 미리 정한 바이트를 돌려주고, 없는 URL은 조회 실패로 처리합니다.
    #[derive(Default)]
    pub struct StaticImages {
        images: HashMap<String, Vec<u8>>,
    }

    impl StaticImages {
        pub fn with(mut self, url: &str, bytes: Vec<u8>) -> Self {
            self.images.insert(url.to_string(), bytes);
            self
        }
    }

    #[async_trait]
    impl ImageFetcher for StaticImages {
        async fn fetch_image(&self, url: &str) -> AppResult<Vec<u8>> {
            self.images
                .get(url)
                .cloned()
                .ok_or_else(|| AppError::FetchFailed(format!("unreachable: {}", url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::repositories::images::HttpImageRepository;
    use crate::services::gallery::resource_cache::test_support::descriptor;

    const BASE: &str = "https://img.test";

    fn decode_data_url(data_url: &str) -> image::DynamicImage {
        let payload = data_url.strip_prefix("data:image/jpeg;base64,").unwrap();
        image::load_from_memory(&STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn test_encode_blur_data_url_downsamples() {
        let data_url = encode_blur_data_url(&png_bytes(400, 300)).unwrap();
        let image = decode_data_url(&data_url);

        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 6);
    }

    #[test]
    fn test_encode_keeps_minimum_height() {
        let data_url = encode_blur_data_url(&png_bytes(1000, 10)).unwrap();
        assert_eq!(decode_data_url(&data_url).height(), 1);
    }

    #[test]
    fn test_encode_rejects_non_image() {
        let result = encode_blur_data_url(b"<html>not an image</html>");
        assert!(matches!(result, Err(AppError::PlaceholderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_generate_prefers_small_variant() {
        let fetcher = StaticImages::default().with("https://img.test/a/small", png_bytes(64, 64));
        let generator = PlaceholderGenerator::new(Arc::new(fetcher), 4);

        let data_url = generator.generate(&descriptor("a", BASE)).await.unwrap();
        assert!(data_url.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn test_unreachable_image_is_unavailable() {
        let generator = PlaceholderGenerator::new(
            Arc::new(HttpImageRepository::new(reqwest::Client::new())),
            1,
        );
        let unreachable = descriptor("x", "http://127.0.0.1:9");

        let result = generator.generate(&unreachable).await;
        assert!(matches!(result, Err(AppError::PlaceholderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_enrich_all_keeps_successful_siblings() {
        let fetcher = StaticImages::default()
            .with("https://img.test/a/small", png_bytes(40, 30))
            .with("https://img.test/c/small", png_bytes(30, 40));
        let generator = PlaceholderGenerator::new(Arc::new(fetcher), 2);
        let descriptors = vec![descriptor("a", BASE), descriptor("b", BASE), descriptor("c", BASE)];

        let enriched = generator.enrich_all(&descriptors).await;

        assert_eq!(
            enriched.iter().map(|d| d.external_id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert!(enriched[0].blur_data_url.is_some());
        assert!(enriched[1].blur_data_url.is_none());
        assert!(enriched[2].blur_data_url.is_some());
        assert!(descriptors.iter().all(|d| d.blur_data_url.is_none()));
    }
}
