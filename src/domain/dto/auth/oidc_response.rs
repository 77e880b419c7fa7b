//! OIDC 프로바이더 응답 DTO 모듈
//!
//! 디스커버리 문서와 토큰 엔드포인트 응답을 표현합니다.

use serde::Deserialize;

use crate::domain::models::auth::TokenBundle;
use crate::errors::AppError;

/// `/.well-known/openid-configuration` 문서 중 사용하는 필드
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,

    #[serde(default)]
    pub jwks_uri: Option<String>,

    #[serde(default)]
    pub code_challenge_methods_supported: Vec<String>,
}

impl ProviderMetadata {
    /// 프로바이더가 지원 목록을 밝히지 않은 경우에는 `S256`을 지원한다고 봅니다.
    pub fn supports_s256(&self) -> bool {
        self.code_challenge_methods_supported.is_empty()
            || self.code_challenge_methods_supported.iter().any(|m| m == "S256")
    }
}

/// 토큰 엔드포인트 응답
///
/// `id_token`이 없으면 OIDC 응답으로 볼 수 없으므로 [`TokenBundle`]로 변환할 때 실패합니다.
#[derive(Debug, Deserialize)]
pub struct TokenEndpointResponse {
    pub access_token: String,

    #[serde(default)]
    pub id_token: Option<String>,

    #[serde(default)]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl TryFrom<TokenEndpointResponse> for TokenBundle {
    type Error = AppError;

    fn try_from(response: TokenEndpointResponse) -> Result<Self, Self::Error> {
        let id_token = response
            .id_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::ExchangeFailed {
                status: None,
                body: "token response did not include an id_token".to_string(),
            })?;

        Ok(TokenBundle {
            access_token: response.access_token,
            id_token,
            refresh_token: response.refresh_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
        })
    }
}
