//! 인보이스 관리 서비스 모듈

pub mod invoice_service;

pub use invoice_service::*;
