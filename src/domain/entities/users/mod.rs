//! Users Entity Module
//!
//! 백오피스 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//! use crate::config::UserRole;
//!
//! let user = User::new(
//!     "finance@acme.com".to_string(),
//!     "Acme Finance".to_string(),
//!     hashed_password,
//!     UserRole::Company,
//!     Some("acme".to_string()),
//! );
//! ```

pub mod user;
