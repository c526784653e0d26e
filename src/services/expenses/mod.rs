//! 지출 관리 서비스 모듈

pub mod expense_service;

pub use expense_service::*;
