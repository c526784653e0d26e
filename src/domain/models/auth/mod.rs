//! 인증 모델 모듈
//!
//! 미들웨어가 요청 확장(extensions)에 심어주는 인증된 사용자 정보와
//! 라우트 가드 설정 모델을 정의합니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use authentication_request::{AuthMode, RequiredRole};
