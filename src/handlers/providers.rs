//! Provider Management HTTP Handlers
//!
//! 공급자(거래처) 관리 엔드포인트입니다. 모든 라우트가 인증을 요구하며,
//! 생성/수정/삭제는 `admin` 또는 `company` 역할이 필요합니다.
//!
//! | 메서드 | 경로 | 설명 | 접근 권한 |
//! |--------|------|------|-----------|
//! | `POST` | `/providers` | 공급자 등록 | admin, company |
//! | `GET` | `/providers` | 공급자 목록 (테넌트 범위) | 인증 |
//! | `GET` | `/providers/{id}` | 공급자 조회 | 인증 |
//! | `PATCH` | `/providers/{id}` | 공급자 수정 | admin, company |
//! | `DELETE` | `/providers/{id}` | 공급자 삭제 | admin, company |

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::common::PageQuery;
use crate::domain::dto::providers::{CreateProviderRequest, UpdateProviderRequest};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::providers::provider_service::ProviderService;

/// 공급자 등록 핸들러
///
/// 호출자의 회사 범위에 새 공급자를 등록합니다.
/// 관리자는 요청 본문의 `company_id`로 대상 회사를 지정합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/providers`
#[post("")]
pub async fn create_provider(
    payload: web::Json<CreateProviderRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProviderService::instance();
    let response = service.create_provider(payload.into_inner(), &user).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 공급자 목록 조회 핸들러
///
/// 호출자의 회사 범위에 속한 공급자를 최신 생성 순으로 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/providers?limit=20&offset=0`
#[get("")]
pub async fn list_providers(
    query: web::Query<PageQuery>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProviderService::instance();
    let providers = service
        .list_providers(query.limit(), query.offset(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(providers))
}

/// 공급자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/providers/{provider_id}`
#[get("/{provider_id}")]
pub async fn get_provider(
    provider_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ProviderService::instance();
    let provider = service.get_provider(&provider_id, &user).await?;

    Ok(HttpResponse::Ok().json(provider))
}

/// 공급자 부분 수정 핸들러
///
/// # 엔드포인트
///
/// `PATCH /api/v1/providers/{provider_id}`
#[patch("/{provider_id}")]
pub async fn update_provider(
    provider_id: web::Path<String>,
    payload: web::Json<UpdateProviderRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProviderService::instance();
    let updated = service
        .update_provider(&provider_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 공급자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /api/v1/providers/{provider_id}`
#[delete("/{provider_id}")]
pub async fn delete_provider(
    provider_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ProviderService::instance();
    service.delete_provider(&provider_id, &user).await?;

    Ok(HttpResponse::NoContent().finish())
}
