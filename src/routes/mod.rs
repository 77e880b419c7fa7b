//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//! 인증 라우트, 이미지 갤러리 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - SSOJet 로그인/콜백/세션/로그아웃 엔드포인트 (`/api/auth`)
//! - 블러 플레이스홀더가 포함된 이미지 목록 (`/api/images`)
//! - 헬스체크 엔드포인트
//!
//! 모든 핸들러는 `web::Data<AppState>`를 통해 서비스에 접근하므로,
//! 앱을 구성할 때 상태를 먼저 등록해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(AppState::from_env()?))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// `(메서드, 경로, 설명)` 형식의 기동 배너용 엔드포인트 목록
pub const ROUTE_TABLE: &[(&str, &str, &str)] = &[
    ("GET", "/health", "헬스체크"),
    ("GET", "/api/auth/signin/ssojet", "SSOJet 로그인 시작"),
    ("GET", "/api/auth/callback/ssojet", "SSOJet 콜백"),
    ("GET", "/api/auth/session", "현재 세션"),
    ("POST", "/api/auth/signout", "로그아웃"),
    ("GET", "/api/images", "이미지 목록"),
    ("GET", "/api/images/{id}", "이미지 상세"),
];

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_gallery_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 모든 인증 라우트는 Public 접근이 가능합니다.
///
/// # Examples
///
/// ```bash
/// # 로그인 시작 (브라우저에서 열기)
/// curl -i http://localhost:8080/api/auth/signin/ssojet
///
/// # 세션 확인
/// curl --cookie "ssojet.session-token=..." http://localhost:8080/api/auth/session
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::signin)
            .service(handlers::auth::callback)
            .service(handlers::auth::get_session)
            .service(handlers::auth::signout)
    );
}

fn configure_gallery_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/images")
            .service(handlers::gallery::list_images)
            .service(handlers::gallery::get_image)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "ssojet_gallery_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "auth": "SSOJet OIDC + PKCE",
///     "session": "JWT cookie"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "auth": "SSOJet OIDC + PKCE",
            "session": "JWT cookie"
        }
    }))
}
