//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자, 인증, 공급자, 지출, 인보이스 라우트와 헬스체크 엔드포인트를
//! 포함합니다.
//!
//! # Features
//!
//! - 사용자/공급자/지출/인보이스 CRUD API 엔드포인트
//! - 승인 워크플로우(제출/승인/반려)와 지급 처리 엔드포인트
//! - 영수증 이미지/인보이스 PDF 업로드·다운로드
//! - 역할 기반 접근 제어 미들웨어 적용
//! - 헬스체크 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 스코프 단위로 인증 레벨을 적용합니다. 역할이 필요한 라우트는
//! 바깥 스코프 안에 빈 경로(`""`)의 내부 스코프를 만들어 별도의
//! 역할 미들웨어로 감쌉니다. 메서드 가드가 각 리소스에 붙어 있으므로
//! 같은 경로라도 메서드가 다르면 올바른 스코프로 라우팅됩니다.
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/expenses")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::expenses::create_expense) // 인증만 필요
//!         .service(
//!             web::scope("")
//!                 .wrap(AuthMiddleware::required_with_roles(vec![
//!                     UserRole::Admin,
//!                     UserRole::Company,
//!                 ]))
//!                 .service(handlers::expenses::approve_expense)
//!         )
//! );
//! ```

use actix_web::web;
use chrono;
use serde_json::json;

use crate::config::UserRole;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_auth_routes(cfg);
    configure_provider_routes(cfg);
    configure_expense_routes(cfg);
    configure_invoice_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Public 라우트 (인증 불필요)
/// - `POST /api/v1/users` - 사용자 생성 (가입)
///
/// ## Protected 라우트 (인증 필요)
/// - `GET /api/v1/users/{id}` - 사용자 조회
/// - `PATCH /api/v1/users/{id}` - 사용자 수정 (admin 또는 본인)
///
/// ## Admin 라우트
/// - `GET /api/v1/users` - 사용자 목록 조회
/// - `DELETE /api/v1/users/{id}` - 사용자 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            // Public - 가입
            .service(handlers::users::create_user)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::users::get_user)
                    .service(handlers::users::update_user)
                    .service(
                        web::scope("")
                            .wrap(AuthMiddleware::required_with_role(UserRole::Admin))
                            .service(handlers::users::list_users)
                            .service(handlers::users::delete_user)
                    )
            )
    );
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인 (공개)
/// - `POST /api/v1/auth/verify` - JWT 토큰 검증 (공개)
/// - `GET /api/v1/auth/me` - 현재 사용자 정보 조회 (인증)
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::verify_token)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::me)
            )
    );
}

/// 공급자 관련 라우트를 설정합니다
///
/// 조회는 인증만 요구하고, 쓰기 작업은 `admin`/`company` 역할이
/// 필요합니다.
fn configure_provider_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/providers")
            .wrap(AuthMiddleware::required())
            .service(handlers::providers::list_providers)
            .service(handlers::providers::get_provider)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required_with_roles(vec![
                        UserRole::Admin,
                        UserRole::Company,
                    ]))
                    .service(handlers::providers::create_provider)
                    .service(handlers::providers::update_provider)
                    .service(handlers::providers::delete_provider)
            )
    );
}

/// 지출 관련 라우트를 설정합니다
///
/// 생성/조회/수정/삭제/제출/영수증 첨부는 인증만 요구하고,
/// 승인/반려 판정은 `admin`/`company` 역할이 필요합니다.
fn configure_expense_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/expenses")
            .wrap(AuthMiddleware::required())
            .service(handlers::expenses::create_expense)
            .service(handlers::expenses::list_expenses)
            .service(handlers::expenses::get_expense)
            .service(handlers::expenses::update_expense)
            .service(handlers::expenses::delete_expense)
            .service(handlers::expenses::submit_expense)
            .service(handlers::expenses::upload_receipt)
            .service(handlers::expenses::download_receipt)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required_with_roles(vec![
                        UserRole::Admin,
                        UserRole::Company,
                    ]))
                    .service(handlers::expenses::approve_expense)
                    .service(handlers::expenses::reject_expense)
            )
    );
}

/// 인보이스 관련 라우트를 설정합니다
///
/// 생성/조회/수정/제출/문서 첨부는 인증만 요구하고,
/// 승인/반려/지급/삭제는 `admin`/`company` 역할이 필요합니다.
fn configure_invoice_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/invoices")
            .wrap(AuthMiddleware::required())
            .service(handlers::invoices::create_invoice)
            .service(handlers::invoices::list_invoices)
            .service(handlers::invoices::get_invoice)
            .service(handlers::invoices::update_invoice)
            .service(handlers::invoices::submit_invoice)
            .service(handlers::invoices::upload_document)
            .service(handlers::invoices::download_document)
            .service(handlers::invoices::upload_acceptance)
            .service(handlers::invoices::download_acceptance)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required_with_roles(vec![
                        UserRole::Admin,
                        UserRole::Company,
                    ]))
                    .service(handlers::invoices::approve_invoice)
                    .service(handlers::invoices::reject_invoice)
                    .service(handlers::invoices::pay_invoice)
                    .service(handlers::invoices::delete_invoice)
            )
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "backoffice_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-08-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "backoffice_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
