//! 핵심 인프라 모듈
//!
//! 애플리케이션 전역에서 사용되는 에러 처리 시스템과
//! 싱글톤 의존성 주입 레지스트리를 제공합니다.

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult};
