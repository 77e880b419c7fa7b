//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 같은 역할을 하며,
//! 서비스는 `web::Data<AppState>`로 주입받습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser / Frontend
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (쿠키 포함)
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 로그인 흐름, 세션, 갤러리             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 외부 API 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: SSOJet 로그인 엔드포인트
//!   - 로그인 시작 (`GET /api/auth/signin/ssojet`)
//!   - 콜백 (`GET /api/auth/callback/ssojet`)
//!   - 세션 조회 (`GET /api/auth/session`)
//!   - 로그아웃 (`POST /api/auth/signout`)
//!
//! - **`gallery`**: 이미지 갤러리 엔드포인트
//!   - 목록 (`GET /api/images`)
//!   - 상세 (`GET /api/images/{id}`)
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, `AppError`의
//! `ResponseError` 구현이 상태 코드와 `{"error": ...}` 본문을 만듭니다.
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_image(
//!     id: web::Path<usize>,
//!     state: web::Data<AppState>,
//! ) -> Result<HttpResponse, AppError> {
//!     let image = state.gallery.image(id.into_inner()).await?; // 없으면 404
//!     Ok(HttpResponse::Ok().json(image))
//! }
//! ```

pub mod auth;
pub mod gallery;
