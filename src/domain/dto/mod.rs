//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선
//! - **명시적 인터페이스**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **도메인 분리**: Entity의 내부 표현과 API 표현의 분리
//!
//! ### 2. 유효성 검증 내장
//! - **타입 안전성**: 컴파일 타임 타입 검증
//! - **런타임 검증**: `validator` 크레이트를 통한 비즈니스 규칙 검증
//! - **에러 메시지**: 한국어 메시지 지원으로 사용자 친화적 에러 응답
//!
//! ### 3. 보안
//! - 민감한 정보(비밀번호 해시, 첨부 파일 원본 데이터)는 응답에서 제외
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common.rs      # 페이지네이션, 승인/반려 요청 등 공유 DTO
//! ├── users/         # 사용자 요청/응답 DTO
//! ├── auth/          # 로그인/토큰 검증 DTO
//! ├── providers/     # 공급자 DTO
//! ├── expenses/      # 지출 DTO
//! └── invoices/      # 인보이스 DTO
//! ```

pub mod common;
pub mod users;
pub mod auth;
pub mod providers;
pub mod expenses;
pub mod invoices;

pub use common::*;
