//! # Configuration Module
//!
//! 백오피스 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 업로드 관련 설정
//! - [`auth_config`] - JWT, 패스워드, 역할 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! `PROFILE` 환경 변수로 `.env.dev` / `.env.prod` 파일이 선택됩니다.
//!
//! ### 2. 보안 우선
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서 기본 비밀키 사용 시 경고 로그 출력
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export MONGODB_DATABASE="backoffice"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 선택 설정
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export BCRYPT_COST="12"           # 4-15 범위
//! export MAX_UPLOAD_BYTES="5242880" # 첨부 파일 크기 상한
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
