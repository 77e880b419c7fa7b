//! SSOJet 갤러리 백엔드
//!
//! SSOJet(OIDC) 인가 코드 + PKCE 로그인으로 사용자를 인증하고,
//! 외부 이미지 목록을 블러 플레이스홀더와 함께 제공하는 서비스입니다.
//!
//! # Features
//!
//! - **OIDC 로그인**: state/nonce/PKCE(S256)로 보호되는 인가 코드 흐름
//! - **세션**: ID 토큰 클레임으로 만든 세션 레코드를 서명된 JWT 쿠키로 유지
//! - **리소스 캐시**: 외부 목록을 한 번만 가져오는 single-flight 캐시
//! - **블러 플레이스홀더**: 8px JPEG data URL을 병렬로 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth, /api/images
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 쿠키, 리다이렉트, JSON 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthFlow, SessionBuilder, ResourceCache, PlaceholderGenerator
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Unsplash 목록, 이미지 바이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  External APIs  │ ← SSOJet, Unsplash
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use ssojet_gallery_backend::core::AppState;
//!
//! let state = AppState::from_env()?;
//! let images = state.gallery.gallery().await;
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
