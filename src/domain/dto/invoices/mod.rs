//! 인보이스 요청/응답 DTO 모듈

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use validator::Validate;

use crate::domain::dto::common::validate_currency_code;
use crate::domain::entities::invoices::invoice::Invoice;
use crate::domain::models::workflow::{ApprovalStatus, PaymentStatus};

/// 인보이스 생성 요청 DTO
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
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    /// 인보이스 번호 (회사 범위 unique)
    #[validate(length(min = 1, max = 64, message = "인보이스 번호는 1-64자 사이여야 합니다"))]
    pub invoice_number: String,

    /// 발행 공급자 ID
    #[validate(length(min = 1, message = "공급자 ID는 필수입니다"))]
    pub provider_id: String,

    /// 청구 금액
    #[validate(range(exclusive_min = 0.0, message = "금액은 0보다 커야 합니다"))]
    pub amount: f64,

    /// 통화 코드 (ISO 4217)
    #[validate(custom(function = "validate_currency_code"))]
    pub currency: String,

    /// 발행일
    pub issue_date: chrono::DateTime<chrono::Utc>,

    /// 지급 기한
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,

    /// 대상 회사 ID (admin 전용 오버라이드)
    pub company_id: Option<String>,
}

/// 인보이스 부분 수정 요청 DTO
///
/// Draft 또는 Rejected 상태에서만 허용되며,
/// Rejected 문서를 수정하면 Draft로 복귀합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    #[validate(range(exclusive_min = 0.0, message = "금액은 0보다 커야 합니다"))]
    pub amount: Option<f64>,

    #[validate(custom(function = "validate_currency_code"))]
    pub currency: Option<String>,

    pub issue_date: Option<chrono::DateTime<chrono::Utc>>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl UpdateInvoiceRequest {
    /// 갱신할 내용이 하나라도 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.currency.is_none()
            && self.issue_date.is_none()
            && self.due_date.is_none()
    }
}

/// 인보이스 응답 DTO
///
/// PDF 원본(base64)은 포함하지 않고 첨부 여부만 노출합니다.
/// 원본은 `GET /api/v1/invoices/{id}/document` 등으로 내려받습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub id: String,
    pub invoice_number: String,
    pub provider_id: String,
    pub company_id: String,
    pub amount: f64,
    pub currency: String,
    pub issue_date: DateTime,
    pub due_date: Option<DateTime>,
    pub status: ApprovalStatus,
    pub payment_status: PaymentStatus,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub paid_at: Option<DateTime>,
    /// 인보이스 PDF 첨부 여부
    pub has_document: bool,
    /// 인수증 PDF 첨부 여부
    pub has_acceptance_document: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id.map(|id| id.to_hex()).unwrap_or_default(),
            invoice_number: invoice.invoice_number,
            provider_id: invoice.provider_id,
            company_id: invoice.company_id,
            amount: invoice.amount,
            currency: invoice.currency,
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            status: invoice.status,
            payment_status: invoice.payment_status,
            approved_by: invoice.approved_by,
            rejection_reason: invoice.rejection_reason,
            paid_at: invoice.paid_at,
            has_document: invoice.document.is_some(),
            has_acceptance_document: invoice.acceptance_document.is_some(),
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateInvoiceRequest {
        CreateInvoiceRequest {
            invoice_number: "INV-2026-001".to_string(),
            provider_id: "665f1f77bcf86cd799439011".to_string(),
            amount: 1500000.0,
            currency: "KRW".to_string(),
            issue_date: chrono::Utc::now(),
            due_date: None,
            company_id: None,
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut req = create_request();
        req.amount = -500.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_invoice_number_rejected() {
        let mut req = create_request();
        req.invoice_number = String::new();
        assert!(req.validate().is_err());
    }
}
