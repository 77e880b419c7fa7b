//! 디코딩된 클레임의 검증 단계
//!
//! 만료(`exp`)와 발급자(`iss`)를 확인합니다.
//! 서명 검증은 아직 하지 않습니다.
// TODO: 디스커버리 문서의 jwks_uri에서 공개키를 받아 RS256 서명 검증 추가

use crate::domain::models::auth::ClaimsRecord;
use crate::errors::{AppError, AppResult};

/// 시계 오차 허용 범위 (초)
pub const DEFAULT_LEEWAY_SECS: i64 = 60;

#[derive(Debug, Clone, Copy)]
pub struct ClaimsVerifier {
    leeway_secs: i64,
}

impl Default for ClaimsVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_LEEWAY_SECS)
    }
}

impl ClaimsVerifier {
    pub fn new(leeway_secs: i64) -> Self {
        Self { leeway_secs }
    }

    /// `exp`가 있으면 `now`와 비교하고, 기대 발급자와 `iss`가 모두 있으면 비교합니다.
    pub fn verify(
        &self,
        claims: ClaimsRecord,
        expected_issuer: Option<&str>,
        now: i64,
    ) -> AppResult<ClaimsRecord> {
        if let Some(expires_at) = claims.expires_at {
            if expires_at.saturating_add(self.leeway_secs) <= now {
                return Err(AppError::TokenRejected(format!(
                    "token expired at {}",
                    expires_at
                )));
            }
        }

        if let (Some(expected), Some(issuer)) = (expected_issuer, claims.issuer.as_deref()) {
            if expected.trim_end_matches('/') != issuer.trim_end_matches('/') {
                return Err(AppError::TokenRejected(format!(
                    "unexpected issuer {}",
                    issuer
                )));
            }
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn claims(exp: Option<i64>, iss: Option<&str>) -> ClaimsRecord {
        ClaimsRecord {
            expires_at: exp,
            issuer: iss.map(str::to_string),
            ..ClaimsRecord::new("u1")
        }
    }

    #[test]
    fn test_accepts_unexpired_token() {
        let verifier = ClaimsVerifier::default();
        assert!(verifier.verify(claims(Some(NOW + 3600), None), None, NOW).is_ok());
        assert!(verifier.verify(claims(None, None), None, NOW).is_ok());
    }

    #[test]
    fn test_expiry_respects_leeway() {
        let verifier = ClaimsVerifier::new(60);

        assert!(verifier.verify(claims(Some(NOW - 30), None), None, NOW).is_ok());
        assert!(matches!(
            verifier.verify(claims(Some(NOW - 60), None), None, NOW),
            Err(AppError::TokenRejected(_))
        ));
    }

    #[test]
    fn test_far_future_expiry_is_accepted() {
        let verifier = ClaimsVerifier::default();
        let verified = verifier.verify(claims(Some(i64::MAX), None), None, NOW).unwrap();

        assert_eq!(verified.expires_at, Some(i64::MAX));
    }

    #[test]
    fn test_issuer_check() {
        let verifier = ClaimsVerifier::default();

        assert!(
            verifier
                .verify(claims(None, Some("https://ssojet.com/")), Some("https://ssojet.com"), NOW)
                .is_ok()
        );
        assert!(matches!(
            verifier.verify(claims(None, Some("https://evil.example")), Some("https://ssojet.com"), NOW),
            Err(AppError::TokenRejected(_))
        ));
        assert!(verifier.verify(claims(None, None), Some("https://ssojet.com"), NOW).is_ok());
    }
}
