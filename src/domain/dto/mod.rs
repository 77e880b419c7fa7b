//! # Data Transfer Objects (DTO) Module
//!
//! 외부와 주고받는 요청/응답 형태를 정의합니다.
//!
//! - [`auth`] - 프로바이더 콜백 쿼리, 디스커버리 문서, 토큰 엔드포인트 응답
//! - [`unsplash`] - Unsplash 사진 목록 응답

pub mod auth;
pub mod unsplash;

pub use auth::*;
pub use unsplash::*;
