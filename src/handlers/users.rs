//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 접근 권한 | 상태 코드 |
//! |--------|------|------|-----------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 (가입) | 공개 | 201 Created |
//! | `GET` | `/users` | 사용자 목록 조회 (페이징) | admin | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 인증 | 200 OK |
//! | `PATCH` | `/users/{id}` | 사용자 부분 수정 | admin 또는 본인 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | admin | 204 No Content |
//!
//! 역할 제한은 라우트 스코프의 [`crate::middlewares::AuthMiddleware`]가,
//! "본인 계정" 같은 문서 단위 규칙은 서비스 계층이 검사합니다.

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::common::PageQuery;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// 새로운 사용자 계정을 생성합니다. 유일한 공개 쓰기 엔드포인트이며,
/// 이메일 고유성을 검증합니다. `company` 역할은 `company_id`가 필수입니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "finance@acme.com",
///   "name": "Acme Finance",
///   "password": "SecurePass123",
///   "role": "company",
///   "company_id": "acme"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "user": {
///     "id": "665f1f77bcf86cd799439011",
///     "email": "finance@acme.com",
///     "name": "Acme Finance",
///     "role": "company",
///     "company_id": "acme",
///     "is_active": true,
///     "created_at": "2026-08-01T00:00:00Z",
///     "updated_at": "2026-08-01T00:00:00Z"
///   },
///   "message": "사용자가 성공적으로 생성되었습니다"
/// }
/// ```
///
/// ## 중복 이메일 (409 Conflict)
/// ```json
/// { "error": "이미 사용 중인 이메일입니다" }
/// ```
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 목록 조회 핸들러 (관리자 전용)
///
/// # 엔드포인트
///
/// `GET /api/v1/users?limit=20&offset=0`
#[get("")]
pub async fn list_users(
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let users = service.list_users(query.limit(), query.offset()).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// 비밀번호 해시를 제외한 사용자 정보를 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/users/{user_id}`
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정 핸들러
///
/// 관리자이거나 본인 계정인 경우에만 허용됩니다.
///
/// # 엔드포인트
///
/// `PATCH /api/v1/users/{user_id}`
#[patch("/{user_id}")]
pub async fn update_user(
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let updated = service
        .update_user(&user_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 사용자 삭제 핸들러 (관리자 전용)
///
/// # 엔드포인트
///
/// `DELETE /api/v1/users/{user_id}`
#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
