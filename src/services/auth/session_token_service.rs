//! 세션 쿠키 JWT 관리 서비스
//!
//! [`SessionRecord`]를 HMAC-SHA256으로 서명한 JWT에 담아 HttpOnly 쿠키로 주고받습니다.
//! 서버 측 세션 저장소는 두지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::domain::models::auth::SessionRecord;
use crate::errors::{AppError, AppResult};

/// 세션 쿠키 이름
pub const SESSION_COOKIE: &str = "ssojet.session-token";

/// 브라우저 쿠키 한도(4KB)에서 이름과 속성 몫을 뺀 값 크기
pub const MAX_COOKIE_VALUE_BYTES: usize = 3800;

/// 세션 토큰이 쿠키 하나에 들어가는지 여부
pub fn fits_in_cookie(token: &str) -> bool {
    token.len() <= MAX_COOKIE_VALUE_BYTES
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    session: SessionRecord,
    iat: i64,
    exp: i64,
}

pub struct SessionTokenService {
    secret: String,
    max_age_hours: i64,
}

impl SessionTokenService {
    pub fn new(secret: impl Into<String>, max_age_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            max_age_hours,
        }
    }

    pub fn from_env() -> Self {
        Self::new(SessionConfig::secret(), SessionConfig::max_age_hours())
    }

    /// 쿠키 `Max-Age`에 쓸 초 단위 수명
    pub fn max_age_secs(&self) -> i64 {
        self.max_age_hours * 3600
    }

    /// 세션 레코드를 서명된 토큰으로 만듭니다.
    pub fn issue(&self, session: &SessionRecord) -> AppResult<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            session: session.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.max_age_hours)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("세션 토큰 생성 실패: {}", e)))?;

        if !fits_in_cookie(&token) {
            log::warn!(
                "세션 토큰이 {}바이트로 쿠키 한도({}바이트)를 넘습니다. 브라우저가 쿠키를 버릴 수 있습니다",
                token.len(),
                MAX_COOKIE_VALUE_BYTES
            );
        }

        Ok(token)
    }

    /// 쿠키 값에서 세션 레코드를 꺼냅니다.
    pub fn read(&self, token: &str) -> AppResult<SessionRecord> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        decode::<SessionClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims.session)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("세션이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 세션입니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("세션 검증 실패: {}", e)),
            })
    }
}
