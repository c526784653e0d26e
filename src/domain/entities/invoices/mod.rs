//! Invoices Entity Module
//!
//! 승인 워크플로우와 지급 보조 상태를 가지는 인보이스 엔티티를
//! 정의하는 모듈입니다. 인보이스 PDF와 인수증 PDF는 `Attachment`
//! 값 객체로 문서에 내장됩니다.

pub mod invoice;
