//! 서버, 외부 리소스, 실행 환경 설정 관리 모듈
//!
//! Unsplash 리소스 프로바이더, 아웃바운드 HTTP 타임아웃,
//! 플레이스홀더 생성 병렬도, 서버 바인딩 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 인증 진단 debug 로그 기본 활성화
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경 - Secure 쿠키
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// Unsplash 리소스 프로바이더 설정
pub struct UnsplashConfig;

impl UnsplashConfig {
    /// API 액세스 키 (`Authorization: Client-ID <key>`)
    pub fn access_key() -> String {
        env::var("UNSPLASH_ACCESS_KEY").unwrap_or_else(|_| {
            log::warn!("UNSPLASH_ACCESS_KEY not set, gallery listing will be rejected by the provider");
            String::new()
        })
    }

    /// API 기본 URL. 기본값: `https://api.unsplash.com`
    pub fn api_url() -> String {
        env::var("UNSPLASH_API_URL")
            .unwrap_or_else(|_| "https://api.unsplash.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 한 번의 캐시 채움에서 가져올 리소스 수. 기본값: 30
    pub fn per_page() -> u32 {
        env::var("UNSPLASH_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| (1..=30).contains(n))
            .unwrap_or(30)
    }

    /// 목록 정렬 기준. 기본값: `popular`
    pub fn order_by() -> String {
        env::var("UNSPLASH_ORDER_BY").unwrap_or_else(|_| "popular".to_string())
    }
}

/// 아웃바운드 HTTP 클라이언트 설정
pub struct HttpClientConfig;

impl HttpClientConfig {
    /// 외부 호출 한 건당 타임아웃. 기본값: 10초
    pub fn timeout() -> Duration {
        let secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(10);

        Duration::from_secs(secs)
    }
}

/// 블러 플레이스홀더 생성 설정
pub struct PlaceholderConfig;

impl PlaceholderConfig {
    /// 동시에 처리할 이미지 수. 기본값: 8
    pub fn concurrency() -> usize {
        env::var("PLACEHOLDER_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(8)
    }
}

/// 한 번에 읽어 둔 Unsplash 설정
#[derive(Clone)]
pub struct UnsplashSettings {
    pub api_url: String,
    pub access_key: String,
    pub per_page: u32,
    pub order_by: String,
}

impl UnsplashSettings {
    pub fn from_env() -> Self {
        Self {
            api_url: UnsplashConfig::api_url(),
            access_key: UnsplashConfig::access_key(),
            per_page: UnsplashConfig::per_page(),
            order_by: UnsplashConfig::order_by(),
        }
    }
}

impl std::fmt::Debug for UnsplashSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashSettings")
            .field("api_url", &self.api_url)
            .field("access_key", &"<redacted>")
            .field("per_page", &self.per_page)
            .field("order_by", &self.order_by)
            .finish()
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}
