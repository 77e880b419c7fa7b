use serde::{Deserialize, Serialize};

/// 토큰 엔드포인트 교환 성공 결과
///
/// AuthFlow가 만들어 SessionBuilder에 넘겨주며, 생성 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
}

impl TokenBundle {
    pub fn new(access_token: impl Into<String>, id_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            id_token: id_token.into(),
            refresh_token: None,
            token_type: None,
            expires_in: None,
        }
    }
}
