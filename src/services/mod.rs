//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 나뉘어 SSOJet 로그인 흐름과 이미지 갤러리를 담당합니다.
//! 서비스 인스턴스는 [`crate::core::AppState`]에서 한 번 생성되어 핸들러에 주입됩니다.
//!
//! # Features
//!
//! - OIDC 인가 코드 + PKCE 로그인 흐름 (`auth`)
//! - ID 토큰 클레임 디코딩과 세션 생성 (`auth`)
//! - 외부 이미지 목록의 single-flight 캐시와 블러 플레이스홀더 (`gallery`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::gallery::GalleryService;
//!
//! let images = state.gallery.gallery().await;
//! ```

pub mod auth;
pub mod gallery;
