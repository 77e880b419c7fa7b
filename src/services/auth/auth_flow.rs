//! # 로그인 시도 상태 머신
//!
//! 로그인 시도 하나마다 [`AuthFlow`] 하나가 만들어지고, 리다이렉트 핸드셰이크 동안
//! [`PendingLoginStore`](crate::caching::PendingLoginStore)에 보관됩니다.
//!
//! ```text
//!  Idle ──begin_login──► AuthorizationRequested ──state 일치──► CodeReceived
//!                                 │                                  │
//!                            state 불일치                       코드 교환 성공
//!                                 ▼                                  ▼
//!                              Failed ◄──교환 실패──────────── TokenExchanged
//!                                 ▲                                  │
//!                                 └──────nonce 불일치──────  SessionBuilder
//!                                                                    ▼
//!                                                          SessionEstablished
//! ```
//!
//! ## 순서 보장
//!
//! - state 비교는 어떤 네트워크 호출보다 먼저 수행됩니다.
//! - [`AuthorizationState`]는 콜백에서 꺼내지는 순간 소비되며, 실패하더라도 다시 쓸 수 없습니다.
//! - 소비된 nonce만 `expected_nonce`로 남아 SessionBuilder의 nonce 비교에 쓰입니다.

use std::sync::Arc;

use crate::config::SsoJetSettings;
use crate::core::AuthDiagnostics;
use crate::domain::dto::auth::ProviderMetadata;
use crate::domain::models::auth::{AuthorizationState, TokenBundle};
use crate::errors::{AppError, AppResult};
use crate::services::auth::oidc_client::OidcClient;
use crate::services::auth::pkce::CODE_CHALLENGE_METHOD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    Idle,
    AuthorizationRequested,
    CodeReceived,
    TokenExchanged,
    SessionEstablished,
    Failed,
}

impl FlowStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowStage::SessionEstablished | FlowStage::Failed)
    }
}

pub struct AuthFlow {
    stage: FlowStage,
    authorization: Option<AuthorizationState>,
    expected_nonce: Option<String>,
    diagnostics: Arc<dyn AuthDiagnostics>,
}

impl AuthFlow {
    pub fn new(diagnostics: Arc<dyn AuthDiagnostics>) -> Self {
        Self {
            stage: FlowStage::Idle,
            authorization: None,
            expected_nonce: None,
            diagnostics,
        }
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    /// 콜백에서 소비된 nonce. 콜백 이전에는 `None`입니다.
    pub fn expected_nonce(&self) -> Option<&str> {
        self.expected_nonce.as_deref()
    }

    /// 새 AuthorizationState를 만들고 인가 요청 URL을 반환합니다.
    ///
    /// 핸들러는 이 URL로 302 리다이렉트합니다.
    pub fn begin_login(
        &mut self,
        metadata: &ProviderMetadata,
        settings: &SsoJetSettings,
    ) -> AppResult<String> {
        if self.stage != FlowStage::Idle {
            return Err(self.invalid_transition("begin_login"));
        }

        if !metadata.supports_s256() {
            self.fail("provider does not advertise S256 code challenge");
            return Err(AppError::ExternalServiceError(
                "프로바이더가 PKCE S256을 지원하지 않습니다".to_string(),
            ));
        }

        let authorization = AuthorizationState::generate();
        let challenge = authorization.pkce_challenge();

        let params = [
            ("client_id", settings.client_id.as_str()),
            ("redirect_uri", settings.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", settings.scope.as_str()),
            ("state", authorization.state()),
            ("nonce", authorization.nonce()),
            ("code_challenge", challenge.as_str()),
            ("code_challenge_method", CODE_CHALLENGE_METHOD),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if metadata.authorization_endpoint.contains('?') { '&' } else { '?' };
        let login_url = format!("{}{}{}", metadata.authorization_endpoint, separator, query_string);

        self.authorization = Some(authorization);
        self.stage = FlowStage::AuthorizationRequested;
        self.diagnostics.debug("AUTHORIZATION_REQUESTED", &format!(
            "redirecting to {}",
            metadata.authorization_endpoint
        ));

        Ok(login_url)
    }

    /// 콜백을 처리합니다: state 비교 후 코드를 토큰으로 교환합니다.
    pub async fn handle_callback(
        &mut self,
        oidc: &OidcClient,
        returned_state: &str,
        code: &str,
    ) -> AppResult<TokenBundle> {
        if self.stage != FlowStage::AuthorizationRequested {
            let error = self.invalid_transition("handle_callback");
            self.fail("callback received outside of an active authorization request");
            return Err(error);
        }

        let Some(authorization) = self.authorization.take() else {
            self.fail("authorization state already consumed");
            return Err(AppError::AuthenticationError("로그인 시도가 이미 사용되었습니다".to_string()));
        };

        if !authorization.matches_state(returned_state) {
            self.fail("returned state does not match the login attempt");
            self.diagnostics.error("STATE_MISMATCH", "callback state rejected");
            return Err(AppError::StateMismatch);
        }

        self.stage = FlowStage::CodeReceived;
        let (nonce, pkce_verifier) = authorization.into_parts();
        self.expected_nonce = Some(nonce);

        match oidc.exchange_code(code, &pkce_verifier).await {
            Ok(tokens) => {
                self.stage = FlowStage::TokenExchanged;
                self.diagnostics.debug("TOKEN_EXCHANGED", "authorization code exchanged");
                Ok(tokens)
            }
            Err(error) => {
                self.fail(&error.to_string());
                self.diagnostics.error("EXCHANGE_FAILED", &error.to_string());
                Err(error)
            }
        }
    }

    pub(crate) fn mark_established(&mut self) -> AppResult<()> {
        if self.stage != FlowStage::TokenExchanged {
            return Err(self.invalid_transition("establish_session"));
        }

        self.stage = FlowStage::SessionEstablished;
        Ok(())
    }

    /// 종료되지 않은 시도를 `Failed`로 옮기고 남은 비밀값을 버립니다.
    pub fn fail(&mut self, reason: &str) {
        if self.stage.is_terminal() {
            return;
        }

        self.diagnostics.warn("LOGIN_ABANDONED", reason);
        self.stage = FlowStage::Failed;
        self.authorization = None;
    }

    #[cfg(test)]
    pub(crate) fn exchanged(nonce: Option<&str>, diagnostics: Arc<dyn AuthDiagnostics>) -> Self {
        Self {
            stage: FlowStage::TokenExchanged,
            authorization: None,
            expected_nonce: nonce.map(str::to_string),
            diagnostics,
        }
    }

    fn invalid_transition(&self, operation: &str) -> AppError {
        AppError::AuthenticationError(format!(
            "{} is not allowed in stage {:?}",
            operation, self.stage
        ))
    }
}
