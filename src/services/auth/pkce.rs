//! PKCE / state / nonce 생성 유틸리티
//!
//! 모든 값은 32바이트(256비트) 난수를 base64url(패딩 없음)로 인코딩한 43자 문자열입니다.
//! challenge는 RFC 7636 `S256` 방식입니다: `BASE64URL(SHA256(verifier))`.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use sha2::{Digest, Sha256};

/// 인가 요청에 실리는 challenge 방식
pub const CODE_CHALLENGE_METHOD: &str = "S256";

fn random_token() -> String {
    let random_bytes: [u8; 32] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(random_bytes)
}

/// PKCE code verifier (43자)
#[must_use]
pub fn generate_code_verifier() -> String {
    random_token()
}

/// `challenge = BASE64URL(SHA256(verifier))`
#[must_use]
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// 콜백과 요청을 연결하는 CSRF 방지 state
#[must_use]
pub fn generate_state() -> String {
    random_token()
}

/// ID 토큰에 바인딩되는 nonce
#[must_use]
pub fn generate_nonce() -> String {
    random_token()
}

/// 길이가 같으면 모든 바이트를 비교하는 상수 시간 비교
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
