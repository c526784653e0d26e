//! 승인 워크플로우 상태 모델
//!
//! 지출과 인보이스가 공유하는 승인 상태 전이 규칙을 정의합니다.
//!
//! ```text
//! Draft ──submit──▶ Pending ──approve──▶ Approved ──pay──▶ (Paid)
//!   ▲                  │
//!   │                  └──reject──▶ Rejected
//!   └────────(edit)─────────────────────┘
//! ```
//!
//! 허용되지 않은 전이는 서비스 계층에서 409 Conflict로 거부됩니다.

use serde::{Deserialize, Serialize};

/// 승인 워크플로우 상태
///
/// 소문자 문자열로 직렬화되어 MongoDB 문서와 API 응답에 그대로 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// 작성 중 - 자유롭게 수정/삭제 가능
    Draft,
    /// 제출됨 - 승인 대기 중, 수정 불가
    Pending,
    /// 승인됨 - 인보이스의 경우 지급 처리 가능
    Approved,
    /// 반려됨 - 반려 사유와 함께 기록되며, 수정 시 Draft로 복귀
    Rejected,
}

impl ApprovalStatus {
    /// 제출(Draft → Pending)이 가능한 상태인지 확인합니다.
    pub fn can_submit(&self) -> bool {
        matches!(self, ApprovalStatus::Draft)
    }

    /// 승인/반려 판정이 가능한 상태인지 확인합니다.
    pub fn can_decide(&self) -> bool {
        matches!(self, ApprovalStatus::Pending)
    }

    /// 내용 수정이 가능한 상태인지 확인합니다.
    ///
    /// 반려된 문서는 수정할 수 있으며, 수정하면 Draft로 복귀하여
    /// 재제출 경로를 탑니다.
    pub fn can_edit(&self) -> bool {
        matches!(self, ApprovalStatus::Draft | ApprovalStatus::Rejected)
    }

    /// 삭제가 가능한 상태인지 확인합니다. Draft에서만 허용됩니다.
    pub fn can_delete(&self) -> bool {
        matches!(self, ApprovalStatus::Draft)
    }

    /// 소문자 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Draft => "draft",
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    /// 문자열에서 상태를 파싱합니다. (목록 필터 쿼리용, 대소문자 무관)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ApprovalStatus::Draft),
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Unknown approval status: {}", s)),
        }
    }
}

/// 인보이스 지급 상태
///
/// 승인 상태와 독립된 보조 상태이며, Approved 인보이스에서만 의미를 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// 미지급 (기본값)
    Unpaid,
    /// 지급 완료
    Paid,
}

impl PaymentStatus {
    /// 소문자 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_allowed_only_from_draft() {
        assert!(ApprovalStatus::Draft.can_submit());
        assert!(!ApprovalStatus::Pending.can_submit());
        assert!(!ApprovalStatus::Approved.can_submit());
        assert!(!ApprovalStatus::Rejected.can_submit());
    }

    #[test]
    fn test_decision_allowed_only_from_pending() {
        assert!(ApprovalStatus::Pending.can_decide());
        assert!(!ApprovalStatus::Draft.can_decide());
        assert!(!ApprovalStatus::Approved.can_decide());
        assert!(!ApprovalStatus::Rejected.can_decide());
    }

    #[test]
    fn test_edit_allowed_from_draft_and_rejected() {
        assert!(ApprovalStatus::Draft.can_edit());
        assert!(ApprovalStatus::Rejected.can_edit());
        assert!(!ApprovalStatus::Pending.can_edit());
        assert!(!ApprovalStatus::Approved.can_edit());
    }

    #[test]
    fn test_delete_allowed_only_from_draft() {
        assert!(ApprovalStatus::Draft.can_delete());
        assert!(!ApprovalStatus::Pending.can_delete());
        assert!(!ApprovalStatus::Approved.can_delete());
        assert!(!ApprovalStatus::Rejected.can_delete());
    }

    #[test]
    fn test_status_string_roundtrip() {
        for status in [
            ApprovalStatus::Draft,
            ApprovalStatus::Pending,
            ApprovalStatus::Approved,
            ApprovalStatus::Rejected,
        ] {
            assert_eq!(ApprovalStatus::from_str(status.as_str()).unwrap(), status);
        }

        assert!(ApprovalStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_status_serialization_is_lowercase() {
        let json = serde_json::to_string(&ApprovalStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let json = serde_json::to_string(&PaymentStatus::Unpaid).unwrap();
        assert_eq!(json, "\"unpaid\"");
    }
}
