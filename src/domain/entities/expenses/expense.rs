//! Expense Entity Implementation
//!
//! 지출 엔티티입니다. Draft 상태로 생성되어 제출/승인/반려의
//! 승인 워크플로우를 따라 이동합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::files::{Attachment, ReceiptAnalysis};
use crate::domain::models::workflow::ApprovalStatus;

/// 지출 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 지출 내역 설명
    pub description: String,
    /// 지출 금액 (양수)
    pub amount: f64,
    /// 통화 코드 (ISO 4217, 3글자)
    pub currency: String,
    /// 지출 분류
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 지출 발생일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<DateTime>,
    /// 승인 워크플로우 상태
    pub status: ApprovalStatus,
    /// 제출한 사용자 ID
    pub submitted_by: String,
    /// 소속 회사 ID (테넌트 스코프)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// 승인 처리한 사용자 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// 반려 사유 (Rejected 상태에서 필수)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// 내장된 영수증 이미지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_image: Option<Attachment>,
    /// 영수증 분석 결과
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ReceiptAnalysis>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Expense {
    /// 새 지출을 Draft 상태로 생성
    pub fn new(
        description: String,
        amount: f64,
        currency: String,
        category: Option<String>,
        expense_date: Option<DateTime>,
        submitted_by: String,
        company_id: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            description,
            amount,
            currency,
            category,
            expense_date,
            status: ApprovalStatus::Draft,
            submitted_by,
            company_id,
            approved_by: None,
            rejection_reason: None,
            receipt_image: None,
            analysis: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
