//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! SSOJet 로그인 핸드셰이크와 갤러리 캐시 파이프라인을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 전파 정책
//!
//! | 분류 | 변형 | 처리 방식 |
//! |------|------|-----------|
//! | 로그인 시도 치명 | `StateMismatch`, `NonceMismatch`, `ExchangeFailed` | 시도 폐기, 세션 없음 |
//! | 클레임 처리 | `MalformedToken`, `ClaimsIncomplete`, `TokenRejected` | `SessionRecord.error`로 복구 |
//! | 리소스 | `FetchFailed`, `PlaceholderUnavailable` | 빈 목록 / 해당 플레이스홀더만 생략 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn check_state(expected: &str, returned: &str) -> Result<(), AppError> {
//!     if expected != returned {
//!         return Err(AppError::StateMismatch);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 플로우, 토큰 디코딩, 외부 리소스 조회에서 발생할 수 있는
/// 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 콜백의 state가 저장된 값과 다름 (401 Unauthorized)
    #[error("State mismatch: callback state does not match the login attempt")]
    StateMismatch,

    /// ID 토큰의 nonce가 로그인 시 생성한 값과 다름 (401 Unauthorized)
    #[error("Nonce mismatch: id token nonce does not match the login attempt")]
    NonceMismatch,

    /// 토큰 엔드포인트가 코드 교환을 거부함 (401 Unauthorized)
    ///
    /// `body`는 PKCE verifier와 client secret이 제거되고 길이가 잘린 상태입니다.
    #[error("Token exchange failed (status {status:?}): {body}")]
    ExchangeFailed { status: Option<u16>, body: String },

    /// 구조적으로 잘못된 토큰 (401 Unauthorized)
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// 필수 클레임(`sub`) 누락 (401 Unauthorized)
    #[error("Claims incomplete: {0}")]
    ClaimsIncomplete(String),

    /// 검증 단계에서 거부된 클레임 (401 Unauthorized)
    #[error("Token rejected: {0}")]
    TokenRejected(String),

    /// 외부 리소스 조회 실패 (502 Bad Gateway)
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// 블러 플레이스홀더 생성 실패 (502 Bad Gateway)
    #[error("Placeholder unavailable: {0}")]
    PlaceholderUnavailable(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StateMismatch
            | AppError::NonceMismatch
            | AppError::ExchangeFailed { .. }
            | AppError::MalformedToken(_)
            | AppError::ClaimsIncomplete(_)
            | AppError::TokenRejected(_)
            | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::FetchFailed(_)
            | AppError::PlaceholderUnavailable(_)
            | AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 외부 조회 실패(`FetchFailed`)로 변환합니다.
    fn fetch_context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn fetch_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::FetchFailed(format!("{}: {}", msg, e)))
    }
}
