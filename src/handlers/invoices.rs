//! Invoice Management HTTP Handlers
//!
//! 인보이스 관리와 승인/지급 워크플로우 엔드포인트입니다. 모든 라우트가
//! 인증을 요구하며, 승인/반려/지급/삭제는 `admin` 또는 `company` 역할이
//! 필요합니다.
//!
//! | 메서드 | 경로 | 설명 | 접근 권한 |
//! |--------|------|------|-----------|
//! | `POST` | `/invoices` | 인보이스 생성 (Draft/Unpaid) | 인증 |
//! | `GET` | `/invoices` | 인보이스 목록 (범위 + 상태 필터) | 인증 |
//! | `GET` | `/invoices/{id}` | 인보이스 조회 | 인증 |
//! | `PATCH` | `/invoices/{id}` | 인보이스 수정 (Draft/Rejected) | 인증 |
//! | `DELETE` | `/invoices/{id}` | 인보이스 삭제 (Draft) | admin, company |
//! | `POST` | `/invoices/{id}/submit` | 제출 | 인증 |
//! | `POST` | `/invoices/{id}/approve` | 승인 | admin, company |
//! | `POST` | `/invoices/{id}/reject` | 반려 | admin, company |
//! | `POST` | `/invoices/{id}/pay` | 지급 처리 | admin, company |
//! | `POST`/`GET` | `/invoices/{id}/document` | 인보이스 PDF 첨부/다운로드 | 인증 |
//! | `POST`/`GET` | `/invoices/{id}/acceptance` | 인수증 PDF 첨부/다운로드 | 인증 |

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::common::{ApproveRequest, PageQuery, RejectRequest};
use crate::domain::dto::invoices::{CreateInvoiceRequest, UpdateInvoiceRequest};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::files::Attachment;
use crate::services::invoices::invoice_service::{DocumentSlot, InvoiceService};
use crate::utils::multipart::{read_upload, PDF_CONTENT_TYPES};

/// 인보이스 생성 핸들러
///
/// 발행 공급자가 존재해야 하며, 인보이스 번호는 회사 범위 안에서
/// 유일해야 합니다. 중복 번호는 409로 거부됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/invoices`
///
/// # 요청 본문
///
/// ```json
/// {
///   "invoice_number": "INV-2026-001",
///   "provider_id": "665f1f77bcf86cd799439011",
///   "amount": 1500000,
///   "currency": "KRW",
///   "issue_date": "2026-08-01T00:00:00Z",
///   "due_date": "2026-09-01T00:00:00Z"
/// }
/// ```
#[post("")]
pub async fn create_invoice(
    payload: web::Json<CreateInvoiceRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = InvoiceService::instance();
    let response = service.create_invoice(payload.into_inner(), &user).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 인보이스 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/invoices?status=approved&limit=20&offset=0`
#[get("")]
pub async fn list_invoices(
    query: web::Query<PageQuery>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = InvoiceService::instance();
    let invoices = service
        .list_invoices(query.limit(), query.offset(), query.status.as_deref(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(invoices))
}

/// 인보이스 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/invoices/{invoice_id}`
#[get("/{invoice_id}")]
pub async fn get_invoice(
    invoice_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = InvoiceService::instance();
    let invoice = service.get_invoice(&invoice_id, &user).await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 인보이스 부분 수정 핸들러
///
/// Draft/Rejected 상태에서만 허용됩니다.
///
/// # 엔드포인트
///
/// `PATCH /api/v1/invoices/{invoice_id}`
#[patch("/{invoice_id}")]
pub async fn update_invoice(
    invoice_id: web::Path<String>,
    payload: web::Json<UpdateInvoiceRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = InvoiceService::instance();
    let updated = service
        .update_invoice(&invoice_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 인보이스 삭제 핸들러 (Draft 전용)
///
/// # 엔드포인트
///
/// `DELETE /api/v1/invoices/{invoice_id}`
#[delete("/{invoice_id}")]
pub async fn delete_invoice(
    invoice_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = InvoiceService::instance();
    service.delete_invoice(&invoice_id, &user).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 인보이스 제출 핸들러 (Draft → Pending)
///
/// # 엔드포인트
///
/// `POST /api/v1/invoices/{invoice_id}/submit`
#[post("/{invoice_id}/submit")]
pub async fn submit_invoice(
    invoice_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = InvoiceService::instance();
    let invoice = service.submit_invoice(&invoice_id, &user).await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 인보이스 승인 핸들러 (Pending → Approved)
///
/// # 엔드포인트
///
/// `POST /api/v1/invoices/{invoice_id}/approve`
#[post("/{invoice_id}/approve")]
pub async fn approve_invoice(
    invoice_id: web::Path<String>,
    payload: web::Json<ApproveRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = InvoiceService::instance();
    let invoice = service
        .approve_invoice(&invoice_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 인보이스 반려 핸들러 (Pending → Rejected)
///
/// 반려 사유는 필수입니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/invoices/{invoice_id}/reject`
#[post("/{invoice_id}/reject")]
pub async fn reject_invoice(
    invoice_id: web::Path<String>,
    payload: web::Json<RejectRequest>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = InvoiceService::instance();
    let invoice = service
        .reject_invoice(&invoice_id, payload.into_inner(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 인보이스 지급 처리 핸들러
///
/// Approved + Unpaid 상태에서만 허용되며, 처리 시점이 기록됩니다.
/// 이미 지급되었거나 승인되지 않은 인보이스는 409로 거부됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/invoices/{invoice_id}/pay`
#[post("/{invoice_id}/pay")]
pub async fn pay_invoice(
    invoice_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = InvoiceService::instance();
    let invoice = service.pay_invoice(&invoice_id, &user).await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 인보이스 PDF 업로드 핸들러
///
/// `document` 파일 필드로 PDF를 받아 인보이스 문서에 내장합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/invoices/{invoice_id}/document`
#[post("/{invoice_id}/document")]
pub async fn upload_document(
    invoice_id: web::Path<String>,
    mut payload: Multipart,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (file, _) = read_upload(&mut payload, "document", PDF_CONTENT_TYPES, None).await?;

    let service = InvoiceService::instance();
    let invoice = service
        .attach_document(&invoice_id, DocumentSlot::Invoice, file, &user)
        .await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 인보이스 PDF 다운로드 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/invoices/{invoice_id}/document`
#[get("/{invoice_id}/document")]
pub async fn download_document(
    invoice_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = InvoiceService::instance();
    let attachment = service
        .get_document(&invoice_id, DocumentSlot::Invoice, &user)
        .await?;

    attachment_response(attachment)
}

/// 인수증 PDF 업로드 핸들러
///
/// `document` 파일 필드로 PDF를 받아 인수증 슬롯에 내장합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/invoices/{invoice_id}/acceptance`
#[post("/{invoice_id}/acceptance")]
pub async fn upload_acceptance(
    invoice_id: web::Path<String>,
    mut payload: Multipart,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (file, _) = read_upload(&mut payload, "document", PDF_CONTENT_TYPES, None).await?;

    let service = InvoiceService::instance();
    let invoice = service
        .attach_document(&invoice_id, DocumentSlot::Acceptance, file, &user)
        .await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 인수증 PDF 다운로드 핸들러
///
/// # 엔드포인트
///
/// `GET /api/v1/invoices/{invoice_id}/acceptance`
#[get("/{invoice_id}/acceptance")]
pub async fn download_acceptance(
    invoice_id: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = InvoiceService::instance();
    let attachment = service
        .get_document(&invoice_id, DocumentSlot::Acceptance, &user)
        .await?;

    attachment_response(attachment)
}

/// 첨부 파일을 다운로드 응답으로 변환합니다.
fn attachment_response(attachment: Attachment) -> Result<HttpResponse, AppError> {
    let bytes = attachment.decode()?;

    Ok(HttpResponse::Ok()
        .content_type(attachment.content_type.clone())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", attachment.filename),
        ))
        .body(bytes))
}
