//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - JWT 토큰 기반 인증 검증
//! - Bearer 토큰 추출 및 검증
//! - 역할(Role) 기반 접근 제어
//! - 사용자 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::config::UserRole;
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/providers")
//!             .wrap(AuthMiddleware::required())
//!             .service(/* 인증만 필요한 라우트 */)
//!             .service(
//!                 web::scope("")
//!                     .wrap(AuthMiddleware::required_with_roles(vec![
//!                         UserRole::Admin,
//!                         UserRole::Company,
//!                     ]))
//!                     .service(/* 역할이 필요한 라우트 */)
//!             )
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
