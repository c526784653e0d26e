//! Invoice Entity Implementation
//!
//! 인보이스 엔티티입니다. 지출과 동일한 승인 워크플로우를 따르며,
//! 추가로 Approved 상태에서만 의미를 가지는 지급 보조 상태를 가집니다.
//! `invoice_number`는 회사 범위 안에서 유일해야 합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::files::Attachment;
use crate::domain::models::workflow::{ApprovalStatus, PaymentStatus};

/// 인보이스 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 인보이스 번호 (회사 범위 unique)
    pub invoice_number: String,
    /// 발행 공급자 ID
    pub provider_id: String,
    /// 소속 회사 ID (테넌트 스코프)
    pub company_id: String,
    /// 청구 금액 (양수)
    pub amount: f64,
    /// 통화 코드 (ISO 4217, 3글자)
    pub currency: String,
    /// 발행일
    pub issue_date: DateTime,
    /// 지급 기한
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime>,
    /// 승인 워크플로우 상태
    pub status: ApprovalStatus,
    /// 지급 상태 (Approved 이후에만 의미)
    pub payment_status: PaymentStatus,
    /// 승인 처리한 사용자 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// 반려 사유 (Rejected 상태에서 필수)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// 지급 처리 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime>,
    /// 내장된 인보이스 PDF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Attachment>,
    /// 내장된 인수증 PDF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_document: Option<Attachment>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Invoice {
    /// 새 인보이스를 Draft/Unpaid 상태로 생성
    pub fn new(
        invoice_number: String,
        provider_id: String,
        company_id: String,
        amount: f64,
        currency: String,
        issue_date: DateTime,
        due_date: Option<DateTime>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            invoice_number,
            provider_id,
            company_id,
            amount,
            currency,
            issue_date,
            due_date,
            status: ApprovalStatus::Draft,
            payment_status: PaymentStatus::Unpaid,
            approved_by: None,
            rejection_reason: None,
            paid_at: None,
            document: None,
            acceptance_document: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 지급 처리가 가능한 상태인지 확인 (Approved + Unpaid)
    pub fn can_pay(&self) -> bool {
        self.status == ApprovalStatus::Approved && self.payment_status == PaymentStatus::Unpaid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> Invoice {
        Invoice::new(
            "INV-2026-001".to_string(),
            "665f1f77bcf86cd799439011".to_string(),
            "acme".to_string(),
            1500.0,
            "KRW".to_string(),
            DateTime::now(),
            None,
        )
    }

    #[test]
    fn test_new_invoice_starts_draft_and_unpaid() {
        let inv = invoice();
        assert_eq!(inv.status, ApprovalStatus::Draft);
        assert_eq!(inv.payment_status, PaymentStatus::Unpaid);
        assert!(inv.paid_at.is_none());
    }

    #[test]
    fn test_payment_requires_approved_and_unpaid() {
        let mut inv = invoice();
        assert!(!inv.can_pay());

        inv.status = ApprovalStatus::Approved;
        assert!(inv.can_pay());

        inv.payment_status = PaymentStatus::Paid;
        assert!(!inv.can_pay());
    }
}
