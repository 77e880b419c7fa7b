//! 인증 관련 설정 관리 모듈
//!
//! SSOJet OpenID Connect 프로바이더, 세션 쿠키, 로그인 시도 타임아웃 설정을
//! 환경 변수에서 읽어옵니다.
//!
//! ## 구성 요소
//!
//! - [`SsoJetConfig`] - 프로바이더 주소, 클라이언트 자격 증명, 리다이렉트 URI
//! - [`SessionConfig`] - 세션 쿠키(JWT) 서명 키와 수명
//! - [`OAuthConfig`] - 진행 중인 로그인 시도의 보관 시간
//! - [`SsoJetSettings`] - 위 값들을 한 번에 읽어 주입 가능한 형태로 묶은 구조체
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export SSOJET_AUTHORITY="https://auth.example.ssojet.com"
//! export SSOJET_CLIENT_ID="your-client-id"
//! export SSOJET_CLIENT_SECRET="your-client-secret"
//! export SSOJET_REDIRECT_URI="https://yourdomain.com/api/auth/callback/ssojet"
//! export SESSION_SECRET="$(openssl rand -base64 32)"
//! ```

use std::env;

use super::data_config::Environment;

/// OIDC 요청 스코프
pub const OIDC_SCOPE: &str = "openid profile email";

/// SSOJet OpenID Connect 프로바이더 설정
///
/// 모든 값은 환경 변수에서 읽으며, 자격 증명이 누락된 경우
/// 경고 로그와 함께 개발용 기본값을 사용합니다.
pub struct SsoJetConfig;

impl SsoJetConfig {
    /// 프로바이더(issuer) 기본 URL을 반환합니다.
    ///
    /// 디스커버리 문서는 `{authority}/.well-known/openid-configuration`에서 조회됩니다.
    /// 끝의 `/`는 제거됩니다.
    ///
    /// # 기본값
    ///
    /// `https://ssojet.com`
    pub fn authority() -> String {
        env::var("SSOJET_AUTHORITY")
            .unwrap_or_else(|_| "https://ssojet.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// OAuth 클라이언트 ID를 반환합니다.
    pub fn client_id() -> String {
        env::var("SSOJET_CLIENT_ID").unwrap_or_else(|_| {
            log::warn!("SSOJET_CLIENT_ID not set, using placeholder client id");
            "ssojet-client-id".to_string()
        })
    }

    /// OAuth 클라이언트 시크릿을 반환합니다.
    ///
    /// 이 값은 어떤 로그나 에러 메시지에도 노출되어서는 안 됩니다.
    pub fn client_secret() -> String {
        env::var("SSOJET_CLIENT_SECRET").unwrap_or_else(|_| {
            log::warn!("SSOJET_CLIENT_SECRET not set, using default (not secure for production!)");
            "ssojet-client-secret".to_string()
        })
    }

    /// 인증 완료 후 프로바이더가 사용자를 돌려보낼 콜백 URI
    ///
    /// # 기본값
    ///
    /// `http://localhost:8080/api/auth/callback/ssojet`
    pub fn redirect_uri() -> String {
        env::var("SSOJET_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/api/auth/callback/ssojet".to_string())
    }

    /// 로그인 성공 후 브라우저를 보낼 경로. 기본값: `/`
    pub fn post_login_redirect() -> String {
        env::var("POST_LOGIN_REDIRECT").unwrap_or_else(|_| "/".to_string())
    }

    /// 인증 진단 로그의 debug 출력 여부
    ///
    /// `SSOJET_DEBUG`가 설정되어 있으면 그 값을 따르고,
    /// 그렇지 않으면 개발 환경에서만 활성화됩니다.
    pub fn debug() -> bool {
        match env::var("SSOJET_DEBUG") {
            Ok(value) => parse_flag(&value),
            Err(_) => Environment::current() == Environment::Development,
        }
    }
}

/// 세션 쿠키 설정
///
/// 세션은 서버 저장소 없이 HS256으로 서명된 JWT 쿠키로 유지됩니다.
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 JWT 서명 비밀키
    pub fn secret() -> String {
        env::var("SESSION_SECRET").unwrap_or_else(|_| {
            log::warn!("SESSION_SECRET not set, using default (not secure for production!)");
            "ssojet-session-secret".to_string()
        })
    }

    /// 세션 유효 시간 (시간 단위). 기본값: 720 (30일)
    pub fn max_age_hours() -> i64 {
        env::var("SESSION_MAX_AGE_HOURS")
            .unwrap_or_else(|_| "720".to_string())
            .parse()
            .unwrap_or(720)
    }

    /// 운영 환경에서는 `Secure` 쿠키만 발급합니다.
    pub fn secure_cookies() -> bool {
        Environment::current() == Environment::Production
    }
}

/// OAuth 일반 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// 진행 중인 로그인 시도를 보관하는 시간 (분 단위)
    ///
    /// 사용자가 로그인을 시작한 뒤 이 시간 안에 콜백이 도착하지 않으면
    /// 해당 시도는 폐기됩니다.
    ///
    /// # 기본값
    ///
    /// 10분
    pub fn login_timeout_minutes() -> i64 {
        env::var("OAUTH_LOGIN_TIMEOUT_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// 한 번에 읽어 둔 SSOJet 설정
///
/// 서비스 계층은 환경 변수를 직접 읽지 않고 이 구조체를 주입받습니다.
/// 테스트에서는 필드를 직접 채워 사용합니다.
#[derive(Clone)]
pub struct SsoJetSettings {
    pub authority: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub post_login_redirect: String,
    pub debug: bool,
}

impl SsoJetSettings {
    pub fn from_env() -> Self {
        Self {
            authority: SsoJetConfig::authority(),
            client_id: SsoJetConfig::client_id(),
            client_secret: SsoJetConfig::client_secret(),
            redirect_uri: SsoJetConfig::redirect_uri(),
            scope: OIDC_SCOPE.to_string(),
            post_login_redirect: SsoJetConfig::post_login_redirect(),
            debug: SsoJetConfig::debug(),
        }
    }

    /// 디스커버리 문서 URL
    pub fn discovery_url(&self) -> String {
        format!("{}/.well-known/openid-configuration", self.authority)
    }
}

// client_secret이 로그에 찍히지 않도록 Debug를 직접 구현합니다.
impl std::fmt::Debug for SsoJetSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsoJetSettings")
            .field("authority", &self.authority)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .field("debug", &self.debug)
            .finish()
    }
}

/// `"1"`, `"true"`, `"yes"`, `"on"` (대소문자 무관)을 참으로 해석합니다.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
