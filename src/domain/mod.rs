//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서와 매핑되는 핵심 비즈니스 객체
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 값 객체 (토큰, 첨부 파일, 승인 워크플로우 상태)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! `User`, `Provider`, `Expense`, `Invoice` 등 MongoDB 컬렉션과 1:1로
//! 대응되는 영속 객체들입니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계의 요청/응답 계약을 정의합니다. `validator` 크레이트로
//! 입력 검증을 수행하며 Entity의 내부 표현과 분리됩니다.
//!
//! ### [`models`] - 값 객체
//!
//! 식별자 없이 값 자체가 의미를 가지는 객체들입니다.
//! JWT 클레임, 인증된 사용자 정보, 첨부 파일, 승인 상태 등이 여기에 속합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
