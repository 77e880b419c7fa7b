//! # Domain Models Module
//!
//! 도메인의 값 객체를 정의하는 모듈입니다.
//! 외부 API 응답 형태는 `../dto/`에 두고, 여기에는 서비스 계층이 주고받는
//! 고정된 형태의 모델만 둡니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/
//! │   ├── authorization_state.rs  ← 로그인 시도별 state / nonce / PKCE verifier
//! │   ├── token_bundle.rs         ← 코드 교환 결과
//! │   ├── claims.rs               ← ID 토큰 클레임 (sub 필수)
//! │   └── session.rs              ← 프레젠테이션에 노출되는 세션 레코드
//! └── gallery/
//!     └── resource.rs             ← 갤러리 리소스 디스크립터
//! ```
//!
//! ## 불변성
//!
//! `TokenBundle`, `ClaimsRecord`, 캐시에 들어간 `ResourceDescriptor`는 생성 이후 바뀌지 않습니다.
//! 블러 플레이스홀더는 렌더링마다 만든 복사본에만 채워집니다.

pub mod auth;
pub mod gallery;

pub use auth::*;
pub use gallery::*;
