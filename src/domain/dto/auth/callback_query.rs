use serde::Deserialize;
use validator::Validate;

/// 프로바이더 콜백 쿼리 파라미터
///
/// 사용자가 인증을 거부하면 `code`/`state` 없이 `error`만 돌아오므로
/// 두 필드는 기본값을 허용하고 `validate()`로 검사합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}
