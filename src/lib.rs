//! 인센드 백오피스 서비스 백엔드
//!
//! 멀티 테넌트 비즈니스 백오피스를 위한 Rust 기반 백엔드 서비스입니다.
//! 사용자/공급업체 계정 관리, JWT 토큰 기반 인증, 경비 관리(영수증 이미지 첨부),
//! 그리고 인보이스 생명주기 관리(승인/반려, 결제 상태, PDF 첨부)를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 역할 기반 계정 생성, 조회, 수정, 삭제
//! - **JWT 인증**: 액세스 토큰 기반 상태 없는 인증 및 역할 기반 라우트 가드
//! - **공급업체 관리**: 회사 단위로 스코프된 공급업체 CRUD
//! - **경비 워크플로우**: 작성 → 제출 → 승인/반려, 영수증 이미지 첨부 및 분석 기록
//! - **인보이스 워크플로우**: 승인/반려 + 결제 서브 상태, PDF 문서 첨부/다운로드
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 도메인 데이터 영구 저장
//! - **Redis**: 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 역할 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (검증, 워크플로우, 권한)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use backoffice_service_backend::services::invoices::invoice_service::InvoiceService;
//! use backoffice_service_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let invoice_service = InvoiceService::instance();
//! let token_service = TokenService::instance();
//!
//! // 인보이스 승인 및 결제 처리
//! let invoice = invoice_service.approve_invoice(&invoice_id, request, &actor).await?;
//! let invoice = invoice_service.pay_invoice(&invoice_id, &actor).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
