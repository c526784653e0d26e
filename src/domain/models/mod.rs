//! # Domain Models Module
//!
//! 도메인의 값 객체(Value Objects)를 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`, `Invoice`, `Expense`
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 일반적으로 불변 객체로 설계
//! - **예시**: `TokenClaims`, `AuthenticatedUser`, `Attachment`, `ApprovalStatus`
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 인증된 사용자 정보와 요청 추출자
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`files`] - 내장 첨부 파일(영수증 이미지, 인보이스 PDF)
//! - [`workflow`] - 승인 워크플로우 상태와 전이 규칙

pub mod auth;
pub mod token;
pub mod files;
pub mod workflow;
