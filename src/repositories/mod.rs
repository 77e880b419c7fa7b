//! 외부 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 이 서비스는 자체 저장소가 없고, 외부 HTTP API가 곧 데이터 소스입니다.
//! 서비스 계층은 구체 타입이 아닌 트레이트([`ResourceSource`], [`ImageFetcher`])에 의존하므로
//! 테스트에서는 카운팅 스텁이나 `wiremock` 서버로 바꿔 끼울 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{ResourceSource, UnsplashResourceRepository};
//!
//! let source: Arc<dyn ResourceSource> =
//!     Arc::new(UnsplashResourceRepository::new(client, UnsplashSettings::from_env()));
//! ```

pub mod resources;
pub mod images;

pub use resources::*;
pub use images::*;
