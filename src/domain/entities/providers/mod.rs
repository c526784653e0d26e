//! Providers Entity Module
//!
//! 회사(테넌트)에 속한 공급자 도메인 엔티티를 정의하는 모듈입니다.

pub mod provider;
