//! # 세션 빌더
//!
//! 코드 교환 결과와 디코딩된 클레임을 합쳐 [`SessionRecord`]를 만듭니다.
//!
//! ## 처리 순서
//!
//! 1. ID 토큰 디코딩 (`ClaimsDecoder`) - 실패하면 `error`가 채워진 레코드로 복구
//! 2. nonce 비교 ([`verify_nonce`]) - 불일치는 로그인 시도 전체를 실패시킴
//! 3. 만료/발급자 검증 (`ClaimsVerifier`) - 거부되면 `error` 레코드로 복구
//! 4. 클레임 → 세션 매핑 ([`SessionBuilder::build`])
//!
//! | 클레임 | 세션 필드 |
//! |--------|-----------|
//! | `sub` | `user.id` |
//! | `name` | `user.name` |
//! | `email` | `user.email` |
//! | `picture` | `user.image` |

use std::sync::Arc;

use crate::core::AuthDiagnostics;
use crate::domain::models::auth::{ClaimsRecord, SessionRecord, SessionUser, TokenBundle};
use crate::errors::{AppError, AppResult};
use crate::services::auth::auth_flow::{AuthFlow, FlowStage};
use crate::services::auth::claims_decoder::ClaimsDecoder;
use crate::services::auth::claims_verifier::ClaimsVerifier;
use crate::services::auth::pkce::constant_time_eq;

/// 로그인 시 생성한 nonce와 토큰의 `nonce` 클레임을 비교합니다.
///
/// 클레임이 없거나 값이 다르면 `NonceMismatch`입니다.
pub fn verify_nonce(expected: &str, claimed: Option<&str>) -> AppResult<()> {
    match claimed {
        Some(claimed) if !expected.is_empty() && constant_time_eq(expected, claimed) => Ok(()),
        _ => Err(AppError::NonceMismatch),
    }
}

pub struct SessionBuilder {
    verifier: ClaimsVerifier,
    diagnostics: Arc<dyn AuthDiagnostics>,
}

impl SessionBuilder {
    pub fn new(verifier: ClaimsVerifier, diagnostics: Arc<dyn AuthDiagnostics>) -> Self {
        Self { verifier, diagnostics }
    }

    /// 클레임 결과를 세션 레코드로 매핑합니다. 실패한 결과는 `error` 레코드가 됩니다.
    pub fn build(tokens: &TokenBundle, claims: AppResult<ClaimsRecord>) -> SessionRecord {
        match claims {
            Ok(claims) => SessionRecord {
                user: Some(SessionUser {
                    id: claims.subject,
                    name: claims.name,
                    email: claims.email,
                    image: claims.picture,
                }),
                access_token: Some(tokens.access_token.clone()),
                id_token: Some(tokens.id_token.clone()),
                error: None,
            },
            Err(_) => SessionRecord::failed(),
        }
    }

    /// 토큰 교환을 마친 로그인 시도에서 세션을 확정합니다.
    ///
    /// `NonceMismatch`만 에러로 반환되고, 클레임 처리 실패는 레코드의 `error`로 돌아옵니다.
    pub fn establish(
        &self,
        flow: &mut AuthFlow,
        tokens: &TokenBundle,
        expected_issuer: Option<&str>,
    ) -> AppResult<SessionRecord> {
        if flow.stage() != FlowStage::TokenExchanged {
            return Err(AppError::AuthenticationError(format!(
                "session cannot be established in stage {:?}",
                flow.stage()
            )));
        }

        let claims = match ClaimsDecoder::decode(&tokens.id_token) {
            Ok(claims) => claims,
            Err(error) => {
                self.diagnostics.error("JWT_CALLBACK_ERROR", &error.to_string());
                flow.mark_established()?;
                return Ok(Self::build(tokens, Err(error)));
            }
        };

        let expected_nonce = flow.expected_nonce().unwrap_or_default().to_string();
        if let Err(error) = verify_nonce(&expected_nonce, claims.nonce.as_deref()) {
            self.diagnostics.error("NONCE_MISMATCH", "id token nonce rejected");
            flow.fail("id token nonce does not match the login attempt");
            return Err(error);
        }

        let now = chrono::Utc::now().timestamp();
        let verified = self.verifier.verify(claims, expected_issuer, now);
        match &verified {
            Ok(claims) => self.diagnostics.debug(
                "SESSION_ESTABLISHED",
                &format!("signed in subject {}", claims.subject),
            ),
            Err(error) => self.diagnostics.warn("CLAIMS_REJECTED", &error.to_string()),
        }

        flow.mark_established()?;
        Ok(Self::build(tokens, verified))
    }
}
