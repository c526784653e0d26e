//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 패턴
//!
//! 모든 핸들러는 동일한 구조를 따릅니다:
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_expense(
//!     payload: web::Json<CreateExpenseRequest>,
//!     user: AuthenticatedUser, // 미들웨어가 주입한 인증 정보
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let service = ExpenseService::instance(); // 싱글톤 패턴
//!     let response = service.create_expense(payload.into_inner(), &user).await?;
//!
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! - **비동기 처리**: 모든 핸들러가 `async/await` 사용
//! - **타입 안전성**: `web::Json`/`web::Path`/`web::Query`로 자동 파싱
//! - **검증 통합**: `validator` 크레이트로 입력 검증
//! - **에러 처리**: `AppError`가 HTTP 상태 코드로 자동 변환
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 (가입/조회/수정/삭제)
//! - **`auth`**: 인증 (로그인/토큰 검증/내 정보)
//! - **`providers`**: 공급자 관리
//! - **`expenses`**: 지출 관리 + 승인 워크플로우 + 영수증 첨부
//! - **`invoices`**: 인보이스 관리 + 승인/지급 워크플로우 + PDF 첨부

pub mod users;
pub mod auth;
pub mod providers;
pub mod expenses;
pub mod invoices;
