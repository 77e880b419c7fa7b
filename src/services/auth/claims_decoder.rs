//! # ID 토큰 클레임 디코더
//!
//! compact 직렬화된 JWT(`header.payload.signature`)의 페이로드를 구조적으로만 해석합니다.
//! 서명 검증과 만료 검사는 하지 않으며, 그 단계는 [`ClaimsVerifier`](super::ClaimsVerifier)가 담당합니다.
//!
//! ## 실패 분류
//!
//! | 입력 | 결과 |
//! |------|------|
//! | 세그먼트가 3개가 아님 | `MalformedToken` |
//! | 페이로드가 base64url이 아님 | `MalformedToken` |
//! | 페이로드가 JSON 객체가 아니거나 필드 타입이 다름 | `MalformedToken` |
//! | `sub` 누락 또는 빈 문자열 | `ClaimsIncomplete` |

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::domain::models::auth::ClaimsRecord;
use crate::errors::{AppError, AppResult};

pub struct ClaimsDecoder;

impl ClaimsDecoder {
    pub fn decode(id_token: &str) -> AppResult<ClaimsRecord> {
        let segments: Vec<&str> = id_token.trim().split('.').collect();
        if segments.len() != 3 {
            return Err(AppError::MalformedToken(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        }

        // 패딩이 붙어 온 토큰도 허용
        let payload = segments[1].trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| AppError::MalformedToken(format!("payload is not base64url: {}", e)))?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::MalformedToken(format!("payload is not JSON: {}", e)))?;

        let object = value
            .as_object()
            .ok_or_else(|| AppError::MalformedToken("payload is not a JSON object".to_string()))?;

        match object.get("sub") {
            None | Some(Value::Null) => {
                return Err(AppError::ClaimsIncomplete("sub claim is missing".to_string()));
            }
            Some(Value::String(sub)) if sub.trim().is_empty() => {
                return Err(AppError::ClaimsIncomplete("sub claim is empty".to_string()));
            }
            _ => {}
        }

        serde_json::from_value(value)
            .map_err(|e| AppError::MalformedToken(format!("claims have unexpected types: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn sign(claims: &ClaimsRecord) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(b"test-secret")).unwrap()
    }

    fn token_with_payload(payload: &serde_json::Value) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.c2ln",
            URL_SAFE_NO_PAD.encode(payload.to_string())
        )
    }

    #[test]
    fn test_decode_round_trip() {
        let claims = ClaimsRecord {
            subject: "u1".to_string(),
            name: Some("Ann".to_string()),
            email: Some("ann@x.com".to_string()),
            picture: Some("https://cdn.example.com/ann.png".to_string()),
            issued_at: Some(1_700_000_000),
            expires_at: Some(1_700_003_600),
            nonce: Some("n-123".to_string()),
            issuer: Some("https://ssojet.com".to_string()),
        };

        assert_eq!(ClaimsDecoder::decode(&sign(&claims)).unwrap(), claims);

        let minimal = ClaimsRecord::new("only-subject");
        assert_eq!(ClaimsDecoder::decode(&sign(&minimal)).unwrap(), minimal);
    }

    #[test]
    fn test_decode_ignores_unknown_claims() {
        let token = token_with_payload(&serde_json::json!({
            "sub": "u1",
            "aud": "client",
            "email_verified": true
        }));

        let claims = ClaimsDecoder::decode(&token).unwrap();
        assert_eq!(claims.subject, "u1");
        assert_eq!(claims.email, None);
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"u"}"#);
        let token = format!("h.{}==.s", payload);

        assert_eq!(ClaimsDecoder::decode(&token).unwrap().subject, "u");
    }

    #[test]
    fn test_wrong_segment_count_is_malformed() {
        for token in ["", "onlyone", "two.parts", "a.b.c.d", "a.b.c.d.e"] {
            assert!(
                matches!(ClaimsDecoder::decode(token), Err(AppError::MalformedToken(_))),
                "token {:?} should be malformed",
                token
            );
        }
    }

    #[test]
    fn test_invalid_base64_payload_is_malformed() {
        let result = ClaimsDecoder::decode("eyJhbGciOiJIUzI1NiJ9.not-base64!!.c2ln");
        assert!(matches!(result, Err(AppError::MalformedToken(_))));
    }

    #[test]
    fn test_non_object_payload_is_malformed() {
        let token = token_with_payload(&serde_json::json!(["sub", "u1"]));
        assert!(matches!(ClaimsDecoder::decode(&token), Err(AppError::MalformedToken(_))));

        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(ClaimsDecoder::decode(&token), Err(AppError::MalformedToken(_))));
    }

    #[test]
    fn test_ill_typed_claim_is_malformed() {
        let token = token_with_payload(&serde_json::json!({ "sub": "u1", "exp": "tomorrow" }));
        assert!(matches!(ClaimsDecoder::decode(&token), Err(AppError::MalformedToken(_))));
    }

    #[test]
    fn test_missing_or_empty_subject_is_incomplete() {
        let token = token_with_payload(&serde_json::json!({ "name": "Ann" }));
        assert!(matches!(ClaimsDecoder::decode(&token), Err(AppError::ClaimsIncomplete(_))));

        let token = token_with_payload(&serde_json::json!({ "sub": "  " }));
        assert!(matches!(ClaimsDecoder::decode(&token), Err(AppError::ClaimsIncomplete(_))));

        let token = token_with_payload(&serde_json::json!({ "sub": null }));
        assert!(matches!(ClaimsDecoder::decode(&token), Err(AppError::ClaimsIncomplete(_))));
    }
}
