//! 공급자 관리 서비스 모듈

pub mod provider_service;

pub use provider_service::*;
