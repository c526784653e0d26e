//! 지출 관리 서비스 구현
//!
//! 지출의 생성, 조회, 수정, 삭제와 승인 워크플로우(제출/승인/반려),
//! 영수증 이미지 첨부를 담당합니다. 상태 전이 규칙은
//! [`ApprovalStatus`]에 정의되어 있으며, 허용되지 않은 전이는
//! `ConflictError`(409)로 거부됩니다.

use std::sync::Arc;
use mongodb::bson::{doc, to_bson, DateTime, Document};
use singleton_macro::service;

use crate::core::errors::AppError;
use crate::domain::dto::common::{ApproveRequest, RejectRequest};
use crate::domain::dto::expenses::{CreateExpenseRequest, ExpenseResponse, UpdateExpenseRequest};
use crate::domain::entities::expenses::expense::Expense;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::files::{Attachment, ReceiptAnalysis};
use crate::domain::models::workflow::ApprovalStatus;
use crate::repositories::expenses::expense_repo::ExpenseRepository;
use crate::utils::multipart::UploadedFile;

/// 지출 관리 서비스
#[service(name = "expense")]
pub struct ExpenseService {
    /// 지출 데이터 액세스 리포지토리 (자동 주입)
    expense_repo: Arc<ExpenseRepository>,
}

impl ExpenseService {
    /// 새 지출을 Draft 상태로 생성
    ///
    /// 제출자는 요청 본문이 아니라 토큰 클레임에서 결정됩니다.
    pub async fn create_expense(
        &self,
        request: CreateExpenseRequest,
        actor: &AuthenticatedUser,
    ) -> Result<ExpenseResponse, AppError> {
        let submitted_by = actor.resolve_actor_id(None).ok_or_else(|| {
            AppError::AuthenticationError("제출자를 확인할 수 없습니다".to_string())
        })?;

        let expense = Expense::new(
            request.description,
            request.amount,
            request.currency.to_uppercase(),
            request.category,
            request.expense_date.map(DateTime::from_chrono),
            submitted_by,
            actor.company_id.clone(),
        );

        let created = self.expense_repo.create(expense).await?;

        Ok(ExpenseResponse::from(created))
    }

    /// ID로 지출 조회
    pub async fn get_expense(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<ExpenseResponse, AppError> {
        let expense = self.find_scoped(id, actor).await?;
        Ok(ExpenseResponse::from(expense))
    }

    /// 지출 목록 조회 (테넌트 범위 + 상태 필터, 최신 생성 순)
    pub async fn list_expenses(
        &self,
        limit: i64,
        offset: u64,
        status: Option<&str>,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<ExpenseResponse>, AppError> {
        let mut filter = scope_filter(actor);

        if let Some(status) = status {
            let status = ApprovalStatus::from_str(status)
                .map_err(AppError::ValidationError)?;
            filter.insert("status", status.as_str());
        }

        let expenses = self.expense_repo.find_page(filter, limit, offset).await?;
        Ok(expenses.into_iter().map(ExpenseResponse::from).collect())
    }

    /// 지출 부분 수정
    ///
    /// Draft/Rejected 상태에서만 허용되며, Rejected 문서를 수정하면
    /// 반려 기록을 지우고 Draft로 복귀합니다.
    pub async fn update_expense(
        &self,
        id: &str,
        request: UpdateExpenseRequest,
        actor: &AuthenticatedUser,
    ) -> Result<ExpenseResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError("수정할 필드가 없습니다".to_string()));
        }

        let expense = self.find_scoped(id, actor).await?;

        if !expense.status.can_edit() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 지출은 수정할 수 없습니다",
                expense.status.as_str()
            )));
        }

        let mut set_doc = Document::new();
        if let Some(description) = request.description {
            set_doc.insert("description", description);
        }
        if let Some(amount) = request.amount {
            set_doc.insert("amount", amount);
        }
        if let Some(currency) = request.currency {
            set_doc.insert("currency", currency.to_uppercase());
        }
        if let Some(category) = request.category {
            set_doc.insert("category", category);
        }
        if let Some(expense_date) = request.expense_date {
            set_doc.insert("expense_date", DateTime::from_chrono(expense_date));
        }
        set_doc.insert("updated_at", DateTime::now());

        let updated = if expense.status == ApprovalStatus::Rejected {
            // 반려 기록을 지우고 Draft로 복귀
            set_doc.insert("status", ApprovalStatus::Draft.as_str());
            self.expense_repo
                .update_with_unset(
                    id,
                    set_doc,
                    doc! { "rejection_reason": "", "approved_by": "" },
                )
                .await?
        } else {
            self.expense_repo.update(id, set_doc).await?
        };

        let updated = updated
            .ok_or_else(|| AppError::NotFound("지출을 찾을 수 없습니다".to_string()))?;

        Ok(ExpenseResponse::from(updated))
    }

    /// 지출 삭제
    ///
    /// Draft 상태에서만 허용되며, 제출자 본인 또는 관리자만 삭제할 수 있습니다.
    pub async fn delete_expense(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<(), AppError> {
        let expense = self.find_scoped(id, actor).await?;

        if !actor.is_admin() && expense.submitted_by != actor.user_id {
            return Err(AppError::AuthorizationError(
                "지출을 삭제할 권한이 없습니다".to_string(),
            ));
        }

        if !expense.status.can_delete() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 지출은 삭제할 수 없습니다",
                expense.status.as_str()
            )));
        }

        self.expense_repo.delete(id).await?;

        Ok(())
    }

    /// 지출 제출 (Draft → Pending)
    pub async fn submit_expense(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<ExpenseResponse, AppError> {
        let expense = self.find_scoped(id, actor).await?;

        if !expense.status.can_submit() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 지출은 제출할 수 없습니다",
                expense.status.as_str()
            )));
        }

        self.transition(id, doc! {
            "status": ApprovalStatus::Pending.as_str(),
            "updated_at": DateTime::now(),
        })
        .await
    }

    /// 지출 승인 (Pending → Approved)
    pub async fn approve_expense(
        &self,
        id: &str,
        request: ApproveRequest,
        actor: &AuthenticatedUser,
    ) -> Result<ExpenseResponse, AppError> {
        let expense = self.find_scoped(id, actor).await?;

        if !expense.status.can_decide() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 지출은 승인할 수 없습니다",
                expense.status.as_str()
            )));
        }

        let approver_id = actor
            .resolve_actor_id(request.approver_id.as_deref())
            .ok_or_else(|| {
                AppError::ValidationError("승인자를 확인할 수 없습니다".to_string())
            })?;

        log::info!("✅ Expense approved: {} by {}", id, approver_id);

        self.transition(id, doc! {
            "status": ApprovalStatus::Approved.as_str(),
            "approved_by": approver_id,
            "updated_at": DateTime::now(),
        })
        .await
    }

    /// 지출 반려 (Pending → Rejected, 사유 필수)
    pub async fn reject_expense(
        &self,
        id: &str,
        request: RejectRequest,
        actor: &AuthenticatedUser,
    ) -> Result<ExpenseResponse, AppError> {
        let reason = request.trimmed_reason().ok_or_else(|| {
            AppError::ValidationError("반려 사유는 필수입니다".to_string())
        })?;

        let expense = self.find_scoped(id, actor).await?;

        if !expense.status.can_decide() {
            return Err(AppError::ConflictError(format!(
                "{} 상태의 지출은 반려할 수 없습니다",
                expense.status.as_str()
            )));
        }

        let approver_id = actor
            .resolve_actor_id(request.approver_id.as_deref())
            .ok_or_else(|| {
                AppError::ValidationError("반려자를 확인할 수 없습니다".to_string())
            })?;

        log::info!("⛔ Expense rejected: {} by {}", id, approver_id);

        self.transition(id, doc! {
            "status": ApprovalStatus::Rejected.as_str(),
            "rejection_reason": reason,
            "approved_by": approver_id,
            "updated_at": DateTime::now(),
        })
        .await
    }

    /// 영수증 이미지 첨부
    ///
    /// 기존 첨부는 새 이미지로 교체됩니다. 선택적으로 전달된
    /// 분석 결과도 함께 기록됩니다.
    pub async fn attach_receipt(
        &self,
        id: &str,
        file: UploadedFile,
        analysis: Option<ReceiptAnalysis>,
        actor: &AuthenticatedUser,
    ) -> Result<ExpenseResponse, AppError> {
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

        let mut set_doc = doc! {
            "receipt_image": attachment_bson,
            "updated_at": DateTime::now(),
        };

        if let Some(analysis) = analysis {
            let analysis_bson = to_bson(&analysis)
                .map_err(|e| AppError::InternalError(format!("분석 결과 직렬화 실패: {}", e)))?;
            set_doc.insert("analysis", analysis_bson);
        }

        self.transition(id, set_doc).await
    }

    /// 첨부된 영수증 이미지 조회
    pub async fn get_receipt(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<Attachment, AppError> {
        let expense = self.find_scoped(id, actor).await?;

        expense.receipt_image.ok_or_else(|| {
            AppError::NotFound("첨부된 영수증이 없습니다".to_string())
        })
    }

    /// 상태 전이/첨부 업데이트를 적용하고 응답으로 변환합니다.
    async fn transition(&self, id: &str, set_doc: Document) -> Result<ExpenseResponse, AppError> {
        let updated = self.expense_repo
            .update(id, set_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("지출을 찾을 수 없습니다".to_string()))?;

        Ok(ExpenseResponse::from(updated))
    }

    /// 테넌트 범위 내에서 지출을 조회합니다.
    ///
    /// 다른 범위의 문서는 존재 여부를 노출하지 않기 위해
    /// `NotFound`로 처리합니다.
    async fn find_scoped(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<Expense, AppError> {
        let expense = self.expense_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("지출을 찾을 수 없습니다".to_string()))?;

        if !can_view(&expense, actor) {
            return Err(AppError::NotFound("지출을 찾을 수 없습니다".to_string()));
        }

        Ok(expense)
    }
}

/// 지출 조회 권한 확인
///
/// 관리자, 같은 회사 범위의 사용자, 제출자 본인에게 허용됩니다.
fn can_view(expense: &Expense, actor: &AuthenticatedUser) -> bool {
    if actor.is_admin() {
        return true;
    }
    if actor.can_access_company(expense.company_id.as_deref()) {
        return true;
    }
    expense.submitted_by == actor.user_id
}

/// 목록 조회용 테넌트 필터
///
/// 관리자는 전체, 회사 범위가 있으면 회사 단위,
/// 없으면 제출자 본인 문서만 조회합니다.
fn scope_filter(actor: &AuthenticatedUser) -> Document {
    if actor.is_admin() {
        return doc! {};
    }

    match actor.company_id.as_deref() {
        Some(company_id) => doc! { "company_id": company_id },
        None => doc! { "submitted_by": &actor.user_id },
    }
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

    fn expense(submitted_by: &str, company_id: Option<&str>) -> Expense {
        Expense::new(
            "출장 숙박비".to_string(),
            185000.0,
            "KRW".to_string(),
            None,
            None,
            submitted_by.to_string(),
            company_id.map(str::to_string),
        )
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = actor(UserRole::Admin, None);

        assert!(can_view(&expense("someone-else", Some("globex")), &admin));
        assert_eq!(scope_filter(&admin), doc! {});
    }

    #[test]
    fn test_company_scope_limits_view() {
        let company = actor(UserRole::Company, Some("acme"));

        assert!(can_view(&expense("someone-else", Some("acme")), &company));
        assert!(!can_view(&expense("someone-else", Some("globex")), &company));
        assert_eq!(scope_filter(&company), doc! { "company_id": "acme" });
    }

    #[test]
    fn test_submitter_can_view_own_expense() {
        let employee = actor(UserRole::Employee, None);

        assert!(can_view(
            &expense("665f1f77bcf86cd799439011", Some("acme")),
            &employee
        ));
        assert!(!can_view(&expense("someone-else", Some("acme")), &employee));
        assert_eq!(
            scope_filter(&employee),
            doc! { "submitted_by": "665f1f77bcf86cd799439011" }
        );
    }
}
