//! # Utilities Module
//!
//! 여러 계층에서 공통으로 쓰는 보조 함수 모음입니다.
//!
//! - [`string_utils`] - 문자열 정리, 비밀값 마스킹, 길이 제한
//! - [`http_client`] - 타임아웃이 적용된 공유 `reqwest::Client`
//! - [`display_terminal`] - 기동 배너와 엔드포인트 표 출력

pub mod string_utils;
pub mod http_client;
pub mod display_terminal;
