//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - SSOJet OIDC, 세션 쿠키, 로그인 시도 타임아웃
//! - [`data_config`] - Unsplash, HTTP 타임아웃, 플레이스홀더, 서버, 실행 환경
//!
//! ## 설계 원칙
//!
//! 설정 네임스페이스(`SsoJetConfig::client_id()` 등)는 호출할 때마다 환경 변수를 읽습니다.
//! 서비스 계층은 부팅 시 한 번 만든 `*Settings` 구조체를 주입받아 사용하므로
//! 테스트에서 환경 변수를 건드리지 않고도 값을 바꿔 끼울 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, SsoJetSettings, UnsplashSettings};
//!
//! let sso = SsoJetSettings::from_env();
//! let unsplash = UnsplashSettings::from_env();
//! println!("Server will bind to {}", ServerConfig::bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # SSOJet
//! export SSOJET_AUTHORITY="https://ssojet.com"
//! export SSOJET_CLIENT_ID="your-client-id"
//! export SSOJET_CLIENT_SECRET="your-client-secret"
//! export SSOJET_DEBUG="true"
//!
//! # 세션
//! export SESSION_SECRET="your-session-secret"
//!
//! # Unsplash
//! export UNSPLASH_ACCESS_KEY="your-access-key"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env.dev` / `.env.prod` 파일 |
//! | `@ConfigurationProperties` | `SsoJetSettings`, `UnsplashSettings` |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
