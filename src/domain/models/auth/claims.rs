use serde::{Deserialize, Serialize};

/// ID 토큰 페이로드에서 꺼낸 고정 형태의 클레임
///
/// `subject`(`sub`)만 필수이며 나머지는 모두 선택입니다.
/// 직렬화 시 JWT 표준 클레임 이름을 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimsRecord {
    #[serde(rename = "sub")]
    pub subject: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,

    #[serde(rename = "exp", default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    #[serde(rename = "iss", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl ClaimsRecord {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            name: None,
            email: None,
            picture: None,
            issued_at: None,
            expires_at: None,
            nonce: None,
            issuer: None,
        }
    }
}
