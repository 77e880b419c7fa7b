//! 캐싱 계층 모듈
//!
//! 프로세스 메모리에 보관하는 단기 상태를 제공합니다.
//!
//! # 주요 기능
//!
//! - 로그인 리다이렉트 동안의 [`AuthFlow`](crate::services::auth::AuthFlow) 보관
//! - TTL 기반 만료와 1회성 꺼내기
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::PendingLoginStore;
//!
//! let attempt_id = store.insert(flow);
//! let flow = store.take(&attempt_id);
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! OAUTH_LOGIN_TIMEOUT_MINUTES=10  # 기본값
//! ```

pub mod pending_logins;

pub use pending_logins::*;
