//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//! 계정 등록, 비밀번호 검증, 프로필 수정, 계정 삭제를 구현합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 이메일 중복 방지
//! - 비활성 계정 로그인 차단
//! - 본인/관리자 권한 검사

pub mod user_service;
