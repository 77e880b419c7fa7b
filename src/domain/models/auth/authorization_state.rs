use std::fmt;

use crate::services::auth::pkce;

/// 진행 중인 로그인 시도 하나의 비밀값 묶음
///
/// 로그인 시작 시 생성되고 콜백에서 정확히 한 번 소비됩니다.
/// 복제할 수 없으며, `Debug` 출력에 verifier가 나타나지 않습니다.
pub struct AuthorizationState {
    state: String,
    nonce: String,
    pkce_verifier: String,
}

impl AuthorizationState {
    /// 새 state / nonce / PKCE verifier를 생성합니다.
    pub fn generate() -> Self {
        Self {
            state: pkce::generate_state(),
            nonce: pkce::generate_nonce(),
            pkce_verifier: pkce::generate_code_verifier(),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn pkce_challenge(&self) -> String {
        pkce::generate_code_challenge(&self.pkce_verifier)
    }

    /// 콜백에서 받은 state를 상수 시간으로 비교합니다.
    pub fn matches_state(&self, returned_state: &str) -> bool {
        pkce::constant_time_eq(&self.state, returned_state)
    }

    /// 상태를 소비하고 nonce와 verifier를 넘겨줍니다.
    pub fn into_parts(self) -> (String, String) {
        (self.nonce, self.pkce_verifier)
    }

    #[cfg(test)]
    pub fn from_parts(state: &str, nonce: &str, pkce_verifier: &str) -> Self {
        Self {
            state: state.to_string(),
            nonce: nonce.to_string(),
            pkce_verifier: pkce_verifier.to_string(),
        }
    }
}

impl fmt::Debug for AuthorizationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationState")
            .field("state", &self.state)
            .field("nonce", &self.nonce)
            .field("pkce_verifier", &"<redacted>")
            .finish()
    }
}
