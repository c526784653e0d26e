//! Expense Management HTTP Handlers
//!
//! 지출 관리와 승인 워크플로우 엔드포인트입니다. 모든 라우트가 인증을
//! 요구하며, 승인/반려는 `admin` 또는 `company` 역할이 필요합니다.
//!
//! | 메서드 | 경로 | 설명 | 접근 권한 |
//! |--------|------|------|-----------|
//! | `POST` | `/expenses` | 지출 생성 (Draft) | 인증 |
//! | `GET` | `/expenses` | 지출 목록 (범위 + 상태 필터) | 인증 |
//! | `GET` | `/expenses/{id}` | 지출 조회 | 인증 |
//! | `PATCH` | `/expenses/{id}` | 지출 수정 (Draft/Rejected) | 인증 |
//! | `DELETE` | `/expenses/{id}` | 지출 삭제 (Draft, 본인/admin) | 인증 |
//! | `POST` | `/expenses/{id}/submit` | 제출 (Draft → Pending) | 인증 |
//! | `POST` | `/expenses/{id}/approve` | 승인 (Pending → Approved) | admin, company |
//! | `POST` | `/expenses/{id}/reject` | 반려 (Pending → Rejected) | admin, company |
//! | `POST` | `/expenses/{id}/image` | 영수증 이미지 업로드 | 인증 |
//! | `GET` | `/expenses/{id}/image` | 영수증 이미지 다운로드 | 인증 |
//!
//! ## 영수증 업로드
//!
//! `multipart/form-data` 본문의 `image` 필드로 jpeg/png 파일을 받습니다.
//! 선택적으로 `analysis` 텍스트 필드(JSON)를 함께 보내면
//! 분석 결과가 지출 문서에 기록됩니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/expenses/{id}/image \
//!   -H "Authorization: Bearer $TOKEN" \
//!   -F "image=@receipt.jpg;type=image/jpeg" \
//!   -F 'analysis={"merchant":"호텔신라","total":185000,"currency":"KRW"}'
//! ```

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::common::{ApproveRequest, PageQuery, RejectRequest};
use crate::domain::dto::expenses::{CreateExpenseRequest, UpdateExpenseRequest};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::files::ReceiptAnalysis;
use crate::services::expenses::expense_service::ExpenseService;
use crate::utils::multipart::{read_upload, IMAGE_CONTENT_TYPES};

/// 지출 생성 핸들러
///
/// 새 지출을 Draft 상태로 생성합니다. 제출자는 토큰에서 결정됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/expenses`
///
/// # 요청 본문
///
/// ```json
/// {
///   "description": "출장 숙박비",
///   "amount": 185000,
///   "currency": "KRW",
///   "category": "travel",
///   "expense_date": "2026-08-12T00:00:00Z"
/// }
/// ```
#[post("")]
pub async fn create_expense(
    payload: web::Json<CreateExpenseRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ExpenseService::instance();
    let response = service.create_expense(payload.into_inner(), &user).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 지출 목록 조회 핸들러
///
/// 호출자의 범위에 속한 지출을 최신 생성 순으로 반환합니다.
/// `status` 쿼리로 승인 상태를 필터링할 수 있습니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/expenses?status=pending&limit=20&offset=0`
#[get("")]
pub async fn list_expenses(
    query: web::Query<PageQuery>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ExpenseService::instance();
    let expenses = service
        .list_expenses(query.limit(), query.offset(), query.status.as_deref(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(expenses))
}

/// 지출 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/expenses/{expense_id}`
#[get("/{expense_id}")]
pub async fn get_expense(
    expense_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ExpenseService::instance();
    let expense = service.get_expense(&expense_id, &user).await?;

    Ok(HttpResponse::Ok().json(expense))
}

/// 지출 부분 수정 핸들러
///
/// Draft/Rejected 상태에서만 허용됩니다. Rejected 지출을 수정하면
/// Draft로 복귀하여 재제출할 수 있습니다.
///
/// # 엔드포인트
///
/// `PATCH /api/v1/expenses/{expense_id}`
#[patch("/{expense_id}")]
pub async fn update_expense(
    expense_id: web::Path<String>,
    payload: web::Json<UpdateExpenseRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ExpenseService::instance();
    let updated = service
        .update_expense(&expense_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 지출 삭제 핸들러
///
/// Draft 상태에서만, 제출자 본인 또는 관리자만 삭제할 수 있습니다.
///
/// # 엔드포인트
///
/// `DELETE /api/v1/expenses/{expense_id}`
#[delete("/{expense_id}")]
pub async fn delete_expense(
    expense_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ExpenseService::instance();
    service.delete_expense(&expense_id, &user).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 지출 제출 핸들러 (Draft → Pending)
///
/// # 엔드포인트
///
/// `POST /api/v1/expenses/{expense_id}/submit`
#[post("/{expense_id}/submit")]
pub async fn submit_expense(
    expense_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ExpenseService::instance();
    let expense = service.submit_expense(&expense_id, &user).await?;

    Ok(HttpResponse::Ok().json(expense))
}

/// 지출 승인 핸들러 (Pending → Approved)
///
/// # 엔드포인트
///
/// `POST /api/v1/expenses/{expense_id}/approve`
#[post("/{expense_id}/approve")]
pub async fn approve_expense(
    expense_id: web::Path<String>,
    payload: web::Json<ApproveRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ExpenseService::instance();
    let expense = service
        .approve_expense(&expense_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(expense))
}

/// 지출 반려 핸들러 (Pending → Rejected)
///
/// 반려 사유는 필수입니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/expenses/{expense_id}/reject`
#[post("/{expense_id}/reject")]
pub async fn reject_expense(
    expense_id: web::Path<String>,
    payload: web::Json<RejectRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ExpenseService::instance();
    let expense = service
        .reject_expense(&expense_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(expense))
}

/// 영수증 이미지 업로드 핸들러
///
/// `image` 파일 필드(jpeg/png)와 선택적 `analysis` 텍스트 필드(JSON)를
/// 받아 지출 문서에 내장합니다. 기존 첨부는 교체됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/expenses/{expense_id}/image`
#[post("/{expense_id}/image")]
pub async fn upload_receipt(
    expense_id: web::Path<String>,
    mut payload: Multipart,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (file, analysis_text) =
        read_upload(&mut payload, "image", IMAGE_CONTENT_TYPES, Some("analysis")).await?;

    let analysis = match analysis_text {
        Some(text) => Some(
            serde_json::from_str::<ReceiptAnalysis>(&text)
                .map_err(|e| AppError::ValidationError(format!("분석 필드 파싱 실패: {}", e)))?,
        ),
        None => None,
    };

    let service = ExpenseService::instance();
    let expense = service
        .attach_receipt(&expense_id, file, analysis, &user)
        .await?;

    Ok(HttpResponse::Ok().json(expense))
}

/// 영수증 이미지 다운로드 핸들러
///
/// 저장된 원본 바이트를 업로드 당시의 MIME 타입으로 반환합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/expenses/{expense_id}/image`
#[get("/{expense_id}/image")]
pub async fn download_receipt(
    expense_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ExpenseService::instance();
    let attachment = service.get_receipt(&expense_id, &user).await?;

    let bytes = attachment.decode()?;

    Ok(HttpResponse::Ok()
        .content_type(attachment.content_type.clone())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", attachment.filename),
        ))
        .body(bytes))
}
