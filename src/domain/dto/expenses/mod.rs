//! 지출 요청/응답 DTO 모듈

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use validator::Validate;

use crate::domain::dto::common::validate_currency_code;
use crate::domain::entities::expenses::expense::Expense;
use crate::domain::models::files::ReceiptAnalysis;
use crate::domain::models::workflow::ApprovalStatus;

/// 지출 생성 요청 DTO
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
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    /// 지출 내역 설명
    #[validate(length(min = 1, max = 500, message = "설명은 1-500자 사이여야 합니다"))]
    pub description: String,

    /// 지출 금액
    #[validate(range(exclusive_min = 0.0, message = "금액은 0보다 커야 합니다"))]
    pub amount: f64,

    /// 통화 코드 (ISO 4217)
    #[validate(custom(function = "validate_currency_code"))]
    pub currency: String,

    /// 지출 분류
    pub category: Option<String>,

    /// 지출 발생일
    pub expense_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// 지출 부분 수정 요청 DTO
///
/// Draft 또는 Rejected 상태에서만 허용되며,
/// Rejected 문서를 수정하면 Draft로 복귀합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    #[validate(length(min = 1, max = 500, message = "설명은 1-500자 사이여야 합니다"))]
    pub description: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "금액은 0보다 커야 합니다"))]
    pub amount: Option<f64>,

    #[validate(custom(function = "validate_currency_code"))]
    pub currency: Option<String>,

    pub category: Option<String>,
    pub expense_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl UpdateExpenseRequest {
    /// 갱신할 내용이 하나라도 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.currency.is_none()
            && self.category.is_none()
            && self.expense_date.is_none()
    }
}

/// 지출 응답 DTO
///
/// 영수증 이미지 원본(base64)은 포함하지 않고 메타데이터만 노출합니다.
/// 원본은 `GET /api/v1/expenses/{id}/image`로 내려받습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub category: Option<String>,
    pub expense_date: Option<DateTime>,
    pub status: ApprovalStatus,
    pub submitted_by: String,
    pub company_id: Option<String>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    /// 영수증 이미지 첨부 여부
    pub has_receipt_image: bool,
    /// 첨부된 영수증의 MIME 타입
    pub receipt_content_type: Option<String>,
    pub analysis: Option<ReceiptAnalysis>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        let receipt_content_type = expense
            .receipt_image
            .as_ref()
            .map(|a| a.content_type.clone());

        Self {
            id: expense.id.map(|id| id.to_hex()).unwrap_or_default(),
            description: expense.description,
            amount: expense.amount,
            currency: expense.currency,
            category: expense.category,
            expense_date: expense.expense_date,
            status: expense.status,
            submitted_by: expense.submitted_by,
            company_id: expense.company_id,
            approved_by: expense.approved_by,
            rejection_reason: expense.rejection_reason,
            has_receipt_image: receipt_content_type.is_some(),
            receipt_content_type,
            analysis: expense.analysis,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::files::Attachment;

    fn create_request() -> CreateExpenseRequest {
        CreateExpenseRequest {
            description: "출장 숙박비".to_string(),
            amount: 185000.0,
            currency: "KRW".to_string(),
            category: Some("travel".to_string()),
            expense_date: None,
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut req = create_request();
        req.amount = 0.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bad_currency_rejected() {
        let mut req = create_request();
        req.currency = "WON".to_string();
        assert!(req.validate().is_ok());

        req.currency = "KRWX".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_exposes_receipt_metadata_only() {
        let mut expense = Expense::new(
            "출장 숙박비".to_string(),
            185000.0,
            "KRW".to_string(),
            None,
            None,
            "665f1f77bcf86cd799439011".to_string(),
            Some("acme".to_string()),
        );
        expense.receipt_image = Some(Attachment::from_bytes(
            "receipt.jpg".to_string(),
            "image/jpeg".to_string(),
            b"jpeg-bytes",
            "665f1f77bcf86cd799439011".to_string(),
        ));

        let response = ExpenseResponse::from(expense);
        assert!(response.has_receipt_image);
        assert_eq!(response.receipt_content_type.as_deref(), Some("image/jpeg"));

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"data\""));
    }
}
