//! 인보이스 관리 서비스 구현
//!
//! 인보이스의 생성, 조회, 수정, 삭제와 승인 워크플로우(제출/승인/반려),
//! 지급 처리, PDF 문서 첨부를 담당합니다. 생성 시 발행 공급자의
//! 존재를 확인하고, 인보이스 번호는 회사 범위 안에서 유일해야 합니다.

use std::sync::Arc;
use mongodb::bson::{doc, to_bson, DateTime, Document};
use singleton_macro::service;

use crate::core::errors::AppError;
use crate::domain::dto::common::{ApproveRequest, RejectRequest};
use crate::domain::dto::invoices::{CreateInvoiceRequest, InvoiceResponse, UpdateInvoiceRequest};
use crate::domain::entities::invoices::invoice::Invoice;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::files::Attachment;
use crate::domain::models::workflow::{ApprovalStatus, PaymentStatus};
use crate::repositories::invoices::invoice_repo::InvoiceRepository;
use crate::repositories::providers::provider_repo::ProviderRepository;
use crate::utils::multipart::UploadedFile;

/// 인보이스 PDF 문서 슬롯
///
/// 인보이스 원본과 인수증은 동일한 첨부 로직을 공유하며,
/// 저장 필드만 다릅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    /// 인보이스 원본 PDF (`document`)
    Invoice,
    /// 인수증 PDF (`acceptance_document`)
    Acceptance,
}

impl DocumentSlot {
    /// MongoDB 문서의 필드 이름
    fn field(&self) -> &'static str {
        match self {
            DocumentSlot::Invoice => "document",
            DocumentSlot::Acceptance => "acceptance_document",
        }
    }
}

/// 인보이스 관리 서비스
#[service(name = "invoice")]
pub struct InvoiceService {
    /// 인보이스 데이터 액세스 리포지토리 (자동 주입)
    invoice_repo: Arc<InvoiceRepository>,
    /// 공급자 리포지토리 (생성 시 공급자 존재 확인용, 자동 주입)
    provider_repo: Arc<ProviderRepository>,
}

impl InvoiceService {
    /// 새 인보이스를 Draft/Unpaid 상태로 생성
    ///
    /// 발행 공급자가 존재하고 호출자의 범위에 속해야 합니다.
    pub async fn create_invoice(
        &self,
        request: CreateInvoiceRequest,
        actor: &AuthenticatedUser,
    ) -> Result<InvoiceResponse, AppError> {
        let company_id = resolve_company_id(request.company_id.as_deref(), actor)?;

        let provider = self.provider_repo
            .find_by_id(&request.provider_id)
            .await?
            .ok_or_else(|| AppError::NotFound("공급자를 찾을 수 없습니다".to_string()))?;

        if provider.company_id != company_id {
            return Err(AppError::NotFound("공급자를 찾을 수 없습니다".to_string()));
        }

        let invoice = Invoice::new(
            request.invoice_number,
            request.provider_id,
            company_id,
            request.amount,
            request.currency.to_uppercase(),
            DateTime::from_chrono(request.issue_date),
            request.due_date.map(DateTime::from_chrono),
        );

        let created = self.invoice_repo.create(invoice).await?;

        log::info!("🧾 Invoice created: {}", created.invoice_number);

        Ok(InvoiceResponse::from(created))
    }

    /// ID로 인보이스 조회
    pub async fn get_invoice(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<InvoiceResponse, AppError> {
        let invoice = self.find_scoped(id, actor).await?;
        Ok(InvoiceResponse::from(invoice))
    }

    /// 인보이스 목록 조회 (테넌트 범위 + 상태 필터, 최신 생성 순)
    pub async fn list_invoices(
        &self,
        limit: i64,
        offset: u64,
        status: Option<&str>,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<InvoiceResponse>, AppError> {
        let mut filter = scope_filter(actor)?;

        if let Some(status) = status {
            let status = ApprovalStatus::from_str(status)
                .map_err(AppError::ValidationError)?;
            filter.insert("status", status.as_str());
        }

        let invoices = self.invoice_repo.find_page(filter, limit, offset).await?;
        Ok(invoices.into_iter().map(InvoiceResponse::from).collect())
    }

    /// 인보이스 부분 수정
    ///
    /// Draft/Rejected 상태에서만 허용되며, Rejected 문서를 수정하면
    /// 반려 기록을 지우고 Draft로 복귀합니다.
    pub async fn update_invoice(
        &self,
        id: &str,
        request: UpdateInvoiceRequest,
        actor: &AuthenticatedUser,
    ) -> Result<InvoiceResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError("수정할 필드가 없습니다".to_string()));
        }

        let invoice = self.find_scoped(id, actor).await?;

        if !invoice.status.can_edit() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 인보이스는 수정할 수 없습니다",
                invoice.status.as_str()
            )));
        }

        let mut set_doc = Document::new();
        if let Some(amount) = request.amount {
            set_doc.insert("amount", amount);
        }
        if let Some(currency) = request.currency {
            set_doc.insert("currency", currency.to_uppercase());
        }
        if let Some(issue_date) = request.issue_date {
            set_doc.insert("issue_date", DateTime::from_chrono(issue_date));
        }
        if let Some(due_date) = request.due_date {
            set_doc.insert("due_date", DateTime::from_chrono(due_date));
        }
        set_doc.insert("updated_at", DateTime::now());

        let updated = if invoice.status == ApprovalStatus::Rejected {
            // 반려 기록을 지우고 Draft로 복귀
            set_doc.insert("status", ApprovalStatus::Draft.as_str());
            self.invoice_repo
                .update_with_unset(
                    id,
                    set_doc,
                    doc! { "rejection_reason": "", "approved_by": "" },
                )
                .await?
        } else {
            self.invoice_repo.update(id, set_doc).await?
        };

        let updated = updated
            .ok_or_else(|| AppError::NotFound("인보이스를 찾을 수 없습니다".to_string()))?;

        Ok(InvoiceResponse::from(updated))
    }

    /// 인보이스 삭제 (Draft 상태에서만 허용)
    pub async fn delete_invoice(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<(), AppError> {
        let invoice = self.find_scoped(id, actor).await?;

        if !invoice.status.can_delete() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 인보이스는 삭제할 수 없습니다",
                invoice.status.as_str()
            )));
        }

        self.invoice_repo.delete(id).await?;

        Ok(())
    }

    /// 인보이스 제출 (Draft → Pending)
    pub async fn submit_invoice(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<InvoiceResponse, AppError> {
        let invoice = self.find_scoped(id, actor).await?;

        if !invoice.status.can_submit() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 인보이스는 제출할 수 없습니다",
                invoice.status.as_str()
            )));
        }

        self.transition(id, doc! {
            "status": ApprovalStatus::Pending.as_str(),
            "updated_at": DateTime::now(),
        })
        .await
    }

    /// 인보이스 승인 (Pending → Approved)
    pub async fn approve_invoice(
        &self,
        id: &str,
        request: ApproveRequest,
        actor: &AuthenticatedUser,
    ) -> Result<InvoiceResponse, AppError> {
        let invoice = self.find_scoped(id, actor).await?;

        if !invoice.status.can_decide() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 인보이스는 승인할 수 없습니다",
                invoice.status.as_str()
            )));
        }

        let approver_id = actor
            .resolve_actor_id(request.approver_id.as_deref())
            .ok_or_else(|| {
                AppError::ValidationError("승인자를 확인할 수 없습니다".to_string())
            })?;

        log::info!("✅ Invoice approved: {} by {}", id, approver_id);

        self.transition(id, doc! {
            "status": ApprovalStatus::Approved.as_str(),
            "approved_by": approver_id,
            "updated_at": DateTime::now(),
        })
        .await
    }

    /// 인보이스 반려 (Pending → Rejected, 사유 필수)
    pub async fn reject_invoice(
        &self,
        id: &str,
        request: RejectRequest,
        actor: &AuthenticatedUser,
    ) -> Result<InvoiceResponse, AppError> {
        let reason = request.trimmed_reason().ok_or_else(|| {
            AppError::ValidationError("반려 사유는 필수입니다".to_string())
        })?;

        let invoice = self.find_scoped(id, actor).await?;

        if !invoice.status.can_decide() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 인보이스는 반려할 수 없습니다",
                invoice.status.as_str()
            )));
        }

        let approver_id = actor
            .resolve_actor_id(request.approver_id.as_deref())
            .ok_or_else(|| {
                AppError::ValidationError("반려자를 확인할 수 없습니다".to_string())
            })?;

        log::info!("⛔ Invoice rejected: {} by {}", id, approver_id);

        self.transition(id, doc! {
            "status": ApprovalStatus::Rejected.as_str(),
            "rejection_reason": reason,
            "approved_by": approver_id,
            "updated_at": DateTime::now(),
        })
        .await
    }

    /// 인보이스 지급 처리
    ///
    /// Approved + Unpaid 상태에서만 허용되며,
    /// 처리 시점이 `paid_at`으로 기록됩니다.
    pub async fn pay_invoice(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<InvoiceResponse, AppError> {
        let invoice = self.find_scoped(id, actor).await?;

        if !invoice.can_pay() {
            return Err(AppError::ConflictError(
                "승인되고 미지급 상태인 인보이스만 지급 처리할 수 있습니다".to_string(),
            ));
        }

        log::info!("💸 Invoice paid: {}", id);

        self.transition(id, doc! {
            "payment_status": PaymentStatus::Paid.as_str(),
            "paid_at": DateTime::now(),
            "updated_at": DateTime::now(),
        })
        .await
    }

    /// PDF 문서 첨부 (인보이스 원본 또는 인수증)
    ///
    /// 기존 첨부는 새 문서로 교체됩니다.
    pub async fn attach_document(
        &self,
        id: &str,
        slot: DocumentSlot,
        file: UploadedFile,
        actor: &AuthenticatedUser,
    ) -> Result<InvoiceResponse, AppError> {
        self.find_scoped(id, actor).await?;

        let uploaded_by = actor.resolve_actor_id(None).unwrap_or_default();
        let attachment = Attachment::from_bytes(
            file.filename,
            file.content_type,
            &file.bytes,
            uploaded_by,
        );

        let attachment_bson = to_bson(&attachment)
            .map_err(|e| AppError::InternalError(format!("첨부 파일 직렬화 실패: {}", e)))?;

        self.transition(id, doc! {
            slot.field(): attachment_bson,
            "updated_at": DateTime::now(),
        })
        .await
    }

    /// 첨부된 PDF 문서 조회
    pub async fn get_document(
        &self,
        id: &str,
        slot: DocumentSlot,
        actor: &AuthenticatedUser,
    ) -> Result<Attachment, AppError> {
        let invoice = self.find_scoped(id, actor).await?;

        let attachment = match slot {
            DocumentSlot::Invoice => invoice.document,
            DocumentSlot::Acceptance => invoice.acceptance_document,
        };

        attachment.ok_or_else(|| {
            AppError::NotFound("첨부된 문서가 없습니다".to_string())
        })
    }

    /// 상태 전이/첨부 업데이트를 적용하고 응답으로 변환합니다.
    async fn transition(&self, id: &str, set_doc: Document) -> Result<InvoiceResponse, AppError> {
        let updated = self.invoice_repo
            .update(id, set_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("인보이스를 찾을 수 없습니다".to_string()))?;

        Ok(InvoiceResponse::from(updated))
    }

    /// 테넌트 범위 내에서 인보이스를 조회합니다.
    async fn find_scoped(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<Invoice, AppError> {
        let invoice = self.invoice_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("인보이스를 찾을 수 없습니다".to_string()))?;

        if !actor.can_access_company(Some(&invoice.company_id)) {
            return Err(AppError::NotFound("인보이스를 찾을 수 없습니다".to_string()));
        }

        Ok(invoice)
    }
}

/// 목록 조회용 테넌트 필터
fn scope_filter(actor: &AuthenticatedUser) -> Result<Document, AppError> {
    if actor.is_admin() {
        return Ok(doc! {});
    }

    let company_id = actor.company_id.as_deref().ok_or_else(|| {
        AppError::AuthorizationError("회사 범위가 없는 계정입니다".to_string())
    })?;

    Ok(doc! { "company_id": company_id })
}

/// 생성 시 소속 회사를 결정합니다.
///
/// 관리자는 본문의 `company_id`가 필수이고,
/// 그 외 역할은 토큰 스코프가 우선합니다.
fn resolve_company_id(
    body_company_id: Option<&str>,
    actor: &AuthenticatedUser,
) -> Result<String, AppError> {
    if actor.is_admin() {
        return body_company_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::ValidationError("company_id를 지정해야 합니다".to_string())
            });
    }

    actor.company_id.clone().ok_or_else(|| {
        AppError::AuthorizationError("회사 범위가 없는 계정입니다".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserRole;

    fn actor(role: UserRole, company_id: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "665f1f77bcf86cd799439011".to_string(),
            sub: "665f1f77bcf86cd799439011".to_string(),
            role,
            company_id: company_id.map(str::to_string),
        }
    }

    #[test]
    fn test_document_slot_field_names() {
        assert_eq!(DocumentSlot::Invoice.field(), "document");
        assert_eq!(DocumentSlot::Acceptance.field(), "acceptance_document");
    }

    #[test]
    fn test_company_scope_filter() {
        let company = actor(UserRole::Company, Some("acme"));
        assert_eq!(
            scope_filter(&company).unwrap(),
            doc! { "company_id": "acme" }
        );

        let admin = actor(UserRole::Admin, None);
        assert_eq!(scope_filter(&admin).unwrap(), doc! {});

        let scopeless = actor(UserRole::Provider, None);
        assert!(scope_filter(&scopeless).is_err());
    }

    #[test]
    fn test_company_resolution_on_create() {
        let company = actor(UserRole::Company, Some("acme"));
        assert_eq!(
            resolve_company_id(Some("globex"), &company).unwrap(),
            "acme"
        );

        let admin = actor(UserRole::Admin, None);
        assert!(resolve_company_id(None, &admin).is_err());
        assert_eq!(
            resolve_company_id(Some("globex"), &admin).unwrap(),
            "globex"
        );
    }
}
