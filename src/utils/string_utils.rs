//! # 문자열 유틸리티
//!
//! 외부 응답 정리와 에러 메시지 마스킹에 쓰는 공통 함수들입니다.

/// 공백만 있는 문자열을 `None`으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 주어진 비밀값이 나타나는 모든 위치를 `[REDACTED]`로 바꿉니다.
///
/// 빈 문자열은 무시합니다. 값이 URL 인코딩된 형태로 들어 있는 경우도 함께 가립니다.
pub fn redact_secrets(text: &str, secrets: &[&str]) -> String {
    let mut redacted = text.to_string();

    for secret in secrets.iter().filter(|s| !s.is_empty()) {
        redacted = redacted.replace(secret, "[REDACTED]");

        let encoded = urlencoding::encode(secret);
        if encoded != *secret {
            redacted = redacted.replace(encoded.as_ref(), "[REDACTED]");
        }
    }

    redacted
}

/// 최대 `max_chars`자까지만 남기고 잘린 경우 `…`를 붙입니다.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_redact_secrets() {
        let body = r#"{"error":"invalid_grant","code_verifier":"abc123","client_secret":"s3cr3t"}"#;
        let redacted = redact_secrets(body, &["abc123", "s3cr3t", ""]);

        assert!(!redacted.contains("abc123"));
        assert!(!redacted.contains("s3cr3t"));
        assert!(redacted.contains("invalid_grant"));
    }

    #[test]
    fn test_redact_secrets_url_encoded_form() {
        let body = "client_secret=a%2Bb%2Fc&grant_type=authorization_code";
        let redacted = redact_secrets(body, &["a+b/c"]);

        assert_eq!(redacted, "client_secret=[REDACTED]&grant_type=authorization_code");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc…");
        assert_eq!(truncate_chars("가나다라", 2), "가나…");
    }
}
