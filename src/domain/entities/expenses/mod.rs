//! Expenses Entity Module
//!
//! 승인 워크플로우를 따르는 지출 도메인 엔티티를 정의하는 모듈입니다.
//! 영수증 이미지는 `Attachment` 값 객체로 문서에 내장됩니다.

pub mod expense;
