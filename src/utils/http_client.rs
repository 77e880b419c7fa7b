//! 공유 아웃바운드 HTTP 클라이언트

use std::time::Duration;

use crate::config::HttpClientConfig;
use crate::errors::{AppResult, ErrorContext};

/// 모든 외부 호출에 같은 타임아웃을 적용한 `reqwest::Client`를 만듭니다.
///
/// 클라이언트는 내부적으로 커넥션 풀을 공유하므로 한 번 만들어 복제해서 씁니다.
pub fn build_http_client(timeout: Duration) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("HTTP 클라이언트 생성 실패")
}

/// 환경 변수의 타임아웃 설정으로 클라이언트를 만듭니다.
pub fn http_client_from_env() -> AppResult<reqwest::Client> {
    build_http_client(HttpClientConfig::timeout())
}
