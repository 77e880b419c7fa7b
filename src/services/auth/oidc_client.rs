//! # SSOJet OIDC 클라이언트
//!
//! 프로바이더와의 HTTP 통신을 담당합니다.
//!
//! - 디스커버리 문서는 처음 필요할 때 한 번 조회하고 보관합니다. 조회에 실패하면 보관하지 않으므로
//!   다음 요청에서 다시 시도합니다.
//! - 코드 교환은 `application/x-www-form-urlencoded`로 전송하며, 실패 응답 본문에서
//!   PKCE verifier와 client secret을 지운 뒤 길이를 제한해 `ExchangeFailed`로 돌려줍니다.
//!
//! ```text
//! POST {token_endpoint}
//!   grant_type=authorization_code
//!   code=...
//!   code_verifier=...
//!   client_id=...
//!   client_secret=...
//!   redirect_uri=...
//! ```

use tokio::sync::OnceCell;

use crate::config::SsoJetSettings;
use crate::domain::dto::auth::{ProviderMetadata, TokenEndpointResponse};
use crate::domain::models::auth::TokenBundle;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{redact_secrets, truncate_chars};

/// `ExchangeFailed.body`에 남기는 최대 글자 수
const MAX_ERROR_BODY_CHARS: usize = 300;

pub struct OidcClient {
    client: reqwest::Client,
    settings: SsoJetSettings,
    metadata: OnceCell<ProviderMetadata>,
}

impl OidcClient {
    pub fn new(client: reqwest::Client, settings: SsoJetSettings) -> Self {
        Self {
            client,
            settings,
            metadata: OnceCell::new(),
        }
    }

    pub fn settings(&self) -> &SsoJetSettings {
        &self.settings
    }

    /// 디스커버리 문서를 반환합니다. 성공한 결과만 보관됩니다.
    pub async fn metadata(&self) -> AppResult<&ProviderMetadata> {
        self.metadata
            .get_or_try_init(|| self.fetch_metadata())
            .await
    }

    async fn fetch_metadata(&self) -> AppResult<ProviderMetadata> {
        let url = self.settings.discovery_url();
        log::info!("OIDC 디스커버리 문서 조회: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::FetchFailed(format!("디스커버리 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailed(format!(
                "디스커버리 문서 조회 실패: HTTP {}",
                status.as_u16()
            )));
        }

        response
            .json::<ProviderMetadata>()
            .await
            .map_err(|e| AppError::FetchFailed(format!("디스커버리 문서 파싱 실패: {}", e)))
    }

    /// Authorization code와 PKCE verifier를 토큰으로 교환합니다.
    pub async fn exchange_code(&self, code: &str, pkce_verifier: &str) -> AppResult<TokenBundle> {
        let token_endpoint = self.metadata().await?.token_endpoint.clone();
        let secrets = [pkce_verifier, self.settings.client_secret.as_str()];

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("code_verifier", pkce_verifier),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
        ];

        let response = self
            .client
            .post(&token_endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExchangeFailed {
                status: None,
                body: sanitize(&e.to_string(), &secrets),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExchangeFailed {
                status: Some(status.as_u16()),
                body: sanitize(&error_text, &secrets),
            });
        }

        let token_response = response
            .json::<TokenEndpointResponse>()
            .await
            .map_err(|e| AppError::ExchangeFailed {
                status: Some(status.as_u16()),
                body: sanitize(&format!("invalid token response: {}", e), &secrets),
            })?;

        TokenBundle::try_from(token_response)
    }
}

fn sanitize(text: &str, secrets: &[&str]) -> String {
    truncate_chars(&redact_secrets(text, secrets), MAX_ERROR_BODY_CHARS)
}
