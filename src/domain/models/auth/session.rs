//! 프레젠테이션 계층에 노출되는 세션 레코드
//!
//! `GET /api/auth/session` 응답 본문이자 세션 쿠키 JWT의 페이로드입니다.
//! 클레임 처리에 실패해도 레코드는 항상 만들어지며, 그때는 `error`만 채워집니다.

use serde::{Deserialize, Serialize};

/// 클레임 처리 실패 시 `SessionRecord.error`에 들어가는 메시지
pub const TOKEN_PROCESSING_ERROR: &str = "Failed to process authentication token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionRecord {
    /// 클레임 처리 실패를 담은 레코드
    pub fn failed() -> Self {
        Self {
            error: Some(TOKEN_PROCESSING_ERROR.to_string()),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.error.is_none()
    }
}
