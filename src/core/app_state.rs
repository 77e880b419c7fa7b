//! # 애플리케이션 상태
//!
//! 서버 시작 시 모든 서비스를 한 번 생성해 `web::Data<AppState>`로 핸들러에 주입합니다.
//!
//! | 필드 | 역할 |
//! |------|------|
//! | `oidc` | 디스커버리 문서 캐시, 코드 교환 |
//! | `session_builder` | ID 토큰 → 세션 레코드 |
//! | `session_tokens` | 세션 쿠키 JWT 발급/검증 |
//! | `pending_logins` | 리다이렉트 중인 로그인 시도 |
//! | `gallery` | 이미지 목록 캐시 + 블러 플레이스홀더 |

use std::sync::Arc;

use crate::caching::PendingLoginStore;
use crate::config::{PlaceholderConfig, SsoJetSettings, UnsplashSettings};
use crate::core::diagnostics::{AuthDiagnostics, LogDiagnostics};
use crate::errors::AppResult;
use crate::repositories::images::HttpImageRepository;
use crate::repositories::resources::UnsplashResourceRepository;
use crate::services::auth::{ClaimsVerifier, OidcClient, SessionBuilder, SessionTokenService};
use crate::services::gallery::{GalleryService, PlaceholderGenerator, ResourceCache};
use crate::utils::http_client::http_client_from_env;

pub struct AppState {
    pub oidc: OidcClient,
    pub session_builder: SessionBuilder,
    pub session_tokens: SessionTokenService,
    pub pending_logins: PendingLoginStore,
    pub gallery: GalleryService,
    pub diagnostics: Arc<dyn AuthDiagnostics>,
}

impl AppState {
    /// 환경 변수로부터 전체 서비스 그래프를 구성합니다.
    pub fn from_env() -> AppResult<Self> {
        let client = http_client_from_env()?;
        let sso_settings = SsoJetSettings::from_env();
        let diagnostics: Arc<dyn AuthDiagnostics> = Arc::new(LogDiagnostics::new(sso_settings.debug));

        log::info!("🔐 SSOJet 설정: {:?}", sso_settings);

        let resources = UnsplashResourceRepository::new(client.clone(), UnsplashSettings::from_env());
        let query = resources.default_query();
        let cache = ResourceCache::new(Arc::new(resources), query);
        let placeholders = PlaceholderGenerator::new(
            Arc::new(HttpImageRepository::new(client.clone())),
            PlaceholderConfig::concurrency(),
        );

        Ok(Self {
            oidc: OidcClient::new(client, sso_settings),
            session_builder: SessionBuilder::new(ClaimsVerifier::default(), diagnostics.clone()),
            session_tokens: SessionTokenService::from_env(),
            pending_logins: PendingLoginStore::from_env(),
            gallery: GalleryService::new(Arc::new(cache), placeholders),
            diagnostics,
        })
    }
}
