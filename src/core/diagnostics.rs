//! # 인증 진단 인터페이스
//!
//! 인증 플로우와 세션 빌더가 남기는 진단 메시지를 받는 싱크입니다.
//! 플로우 코드는 `log` 매크로를 직접 호출하지 않고 주입받은
//! [`AuthDiagnostics`] 구현체로 메시지를 보냅니다.
//!
//! | 구현체 | 용도 |
//! |--------|------|
//! | [`LogDiagnostics`] | 운영: `log` 크레이트로 전달, debug는 플래그로 제어 |
//! | [`NoopDiagnostics`] | 메시지를 버림 |
//!
//! 어떤 구현체에도 PKCE verifier나 client secret을 넘기지 않습니다.

/// 진단 메시지 싱크
pub trait AuthDiagnostics: Send + Sync {
    fn error(&self, code: &str, message: &str);
    fn warn(&self, code: &str, message: &str);
    fn debug(&self, code: &str, message: &str);
}

/// `log` 크레이트로 전달하는 기본 구현
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics {
    debug_enabled: bool,
}

impl LogDiagnostics {
    pub fn new(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }
}

impl AuthDiagnostics for LogDiagnostics {
    fn error(&self, code: &str, message: &str) {
        log::error!(target: "ssojet", "[{}] {}", code, message);
    }

    fn warn(&self, code: &str, message: &str) {
        log::warn!(target: "ssojet", "[{}] {}", code, message);
    }

    fn debug(&self, code: &str, message: &str) {
        if self.debug_enabled {
            log::debug!(target: "ssojet", "[{}] {}", code, message);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl AuthDiagnostics for NoopDiagnostics {
    fn error(&self, _code: &str, _message: &str) {}
    fn warn(&self, _code: &str, _message: &str) {}
    fn debug(&self, _code: &str, _message: &str) {}
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::AuthDiagnostics;

    /// 기록된 진단 메시지 한 건
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DiagnosticEntry {
        pub level: &'static str,
        pub code: String,
        pub message: String,
    }

    /// 받은 메시지를 순서대로 보관하는 구현
    #[derive(Debug, Default)]
    pub struct RecordingDiagnostics {
        entries: Mutex<Vec<DiagnosticEntry>>,
    }

    impl RecordingDiagnostics {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn entries(&self) -> Vec<DiagnosticEntry> {
            match self.entries.lock() {
                Ok(entries) => entries.clone(),
                Err(poisoned) => poisoned.into_inner().clone(),
            }
        }

        fn push(&self, level: &'static str, code: &str, message: &str) {
            let entry = DiagnosticEntry {
                level,
                code: code.to_string(),
                message: message.to_string(),
            };

            match self.entries.lock() {
                Ok(mut entries) => entries.push(entry),
                Err(poisoned) => poisoned.into_inner().push(entry),
            }
        }
    }

    impl AuthDiagnostics for RecordingDiagnostics {
        fn error(&self, code: &str, message: &str) {
            self.push("error", code, message);
        }

        fn warn(&self, code: &str, message: &str) {
            self.push("warn", code, message);
        }

        fn debug(&self, code: &str, message: &str) {
            self.push("debug", code, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingDiagnostics;
    use super::*;

    #[test]
    fn test_recording_diagnostics_keeps_order() {
        let diagnostics = RecordingDiagnostics::new();
        diagnostics.debug("BEGIN_LOGIN", "authorization requested");
        diagnostics.error("STATE_MISMATCH", "callback rejected");

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, "debug");
        assert_eq!(entries[1].code, "STATE_MISMATCH");
    }

    #[test]
    fn test_log_diagnostics_without_logger_does_not_panic() {
        let diagnostics = LogDiagnostics::new(true);
        diagnostics.debug("TEST", "debug message");
        diagnostics.warn("TEST", "warn message");
        diagnostics.error("TEST", "error message");
    }
}
