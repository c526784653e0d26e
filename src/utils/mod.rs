//! 공통 유틸리티 모듈
//!
//! 터미널 출력 포맷팅, multipart 업로드 처리 등
//! 여러 계층에서 공유되는 보조 기능을 모아둡니다.

pub mod display_terminal;
pub mod multipart;
