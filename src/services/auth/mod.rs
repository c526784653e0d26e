//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스 토큰 생성/검증
//! - Bearer 헤더 파싱
//! - 역할/회사 클레임 구성
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let access_token = token_service.generate_access_token(&user)?;
//! let claims = token_service.verify_token(&access_token)?;
//! ```

pub mod token_service;

pub use token_service::*;
