//! Authentication HTTP Handlers
//!
//! SSOJet OIDC 로그인 흐름의 HTTP 엔드포인트입니다.
//! 세션은 서명된 JWT 쿠키로만 유지되며 서버에는 진행 중인 로그인 시도만 잠시 보관됩니다.
//!
//! # Endpoints
//!
//! - `GET /api/auth/signin/ssojet` - 인가 요청 URL로 302 리다이렉트
//! - `GET /api/auth/callback/ssojet` - 코드 교환 후 세션 쿠키 발급
//! - `GET /api/auth/session` - 현재 세션 레코드 (없으면 `null`)
//! - `POST /api/auth/signout` - 세션 쿠키 삭제
use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::caching::LOGIN_ATTEMPT_COOKIE;
use crate::config::SessionConfig;
use crate::core::AppState;
use crate::domain::dto::auth::OAuthCallbackQuery;
use crate::errors::errors::AppError;
use crate::services::auth::{AuthFlow, SESSION_COOKIE};

/// 로그인 시작 핸들러
///
/// 새 로그인 시도를 만들고 프로바이더 인가 엔드포인트로 리다이렉트합니다.
///
/// # Endpoint
/// `GET /api/auth/signin/ssojet`
#[get("/signin/ssojet")]
pub async fn signin(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let metadata = state.oidc.metadata().await?;

    let mut flow = AuthFlow::new(state.diagnostics.clone());
    let login_url = flow.begin_login(metadata, state.oidc.settings())?;
    let attempt_id = state.pending_logins.insert(flow);

    let attempt_cookie = Cookie::build(LOGIN_ATTEMPT_COOKIE, attempt_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(SessionConfig::secure_cookies())
        .max_age(CookieDuration::seconds(state.pending_logins.ttl().as_secs() as i64))
        .finish();

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, login_url))
        .cookie(attempt_cookie)
        .finish())
}

/// OIDC 콜백 처리 핸들러
///
/// 로그인 시도 쿠키로 보관된 [`AuthFlow`]를 꺼내 state 비교, 코드 교환,
/// 세션 생성을 차례로 수행합니다. 어떤 결과든 시도는 다시 쓸 수 없습니다.
///
/// # Endpoint
/// `GET /api/auth/callback/ssojet?code={code}&state={state}`
#[get("/callback/ssojet")]
pub async fn callback(
    req: HttpRequest,
    query: web::Query<OAuthCallbackQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut flow = req
        .cookie(LOGIN_ATTEMPT_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
        .and_then(|attempt_id| state.pending_logins.take(&attempt_id))
        .ok_or_else(|| {
            AppError::AuthenticationError("진행 중인 로그인 시도가 없거나 만료되었습니다".to_string())
        })?;

    // 사용자가 거부했거나 프로바이더가 에러를 돌려준 경우
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("SSOJet 콜백 에러: {} - {}", error, error_msg);
        flow.fail(error);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    if let Err(e) = query.validate() {
        flow.fail("callback query failed validation");
        return Err(AppError::ValidationError(e.to_string()));
    }

    let issuer = state.oidc.metadata().await?.issuer.clone();
    let tokens = flow.handle_callback(&state.oidc, &query.state, &query.code).await?;
    let record = state
        .session_builder
        .establish(&mut flow, &tokens, Some(issuer.as_str()))?;

    if let Some(user) = &record.user {
        log::info!("SSOJet 로그인 성공: {}", user.id);
    }

    let session_cookie = Cookie::build(SESSION_COOKIE, state.session_tokens.issue(&record)?)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(SessionConfig::secure_cookies())
        .max_age(CookieDuration::seconds(state.session_tokens.max_age_secs()))
        .finish();

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, state.oidc.settings().post_login_redirect.clone()))
        .cookie(session_cookie)
        .cookie(removal_cookie(LOGIN_ATTEMPT_COOKIE))
        .finish())
}

/// 현재 세션 조회 핸들러
///
/// 세션 쿠키가 없거나 검증에 실패하면 `null`을 반환합니다.
///
/// # Endpoint
/// `GET /api/auth/session`
#[get("/session")]
pub async fn get_session(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let Some(cookie) = req.cookie(SESSION_COOKIE) else {
        return HttpResponse::Ok().json(serde_json::Value::Null);
    };

    match state.session_tokens.read(cookie.value()) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => {
            log::debug!("세션 쿠키 무시: {}", e);
            HttpResponse::Ok().json(serde_json::Value::Null)
        }
    }
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `POST /api/auth/signout`
#[post("/signout")]
pub async fn signout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(removal_cookie(SESSION_COOKIE))
        .json(serde_json::json!({ "message": "로그아웃 되었습니다" }))
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}
