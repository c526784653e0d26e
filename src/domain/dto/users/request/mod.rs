//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 요청 DTO들을 정의합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 이메일, 길이, 패턴 등 기본 형식 규칙 (validator)
//! 3. **비즈니스 검증**: 도메인 특화 규칙 (비밀번호 강도, 역할별 필수 필드)
//!
//! 중복 이메일 확인 등 저장소 조회가 필요한 검증은 서비스 계층에서 수행됩니다.

pub mod create_user_request;
pub mod update_user_request;

pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;
