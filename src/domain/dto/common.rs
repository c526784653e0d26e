//! 여러 도메인이 공유하는 요청 DTO
//!
//! 페이지네이션 쿼리와 승인 워크플로우 전이 요청은 지출과 인보이스가
//! 동일한 형태를 사용하므로 여기에 모아둡니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 목록 조회의 페이지네이션 + 상태 필터 쿼리
///
/// `GET /api/v1/invoices?status=pending&limit=50&offset=100` 형태로 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PageQuery {
    /// 한 페이지 크기 (기본 20, 최대 100)
    #[validate(range(min = 1, max = 100, message = "limit은 1-100 사이여야 합니다"))]
    pub limit: Option<i64>,
    /// 건너뛸 문서 수 (기본 0)
    #[validate(range(min = 0, message = "offset은 0 이상이어야 합니다"))]
    pub offset: Option<u64>,
    /// 승인 상태 필터 (draft/pending/approved/rejected)
    pub status: Option<String>,
}

impl PageQuery {
    /// 검증된 limit 값을 반환합니다.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    /// 검증된 offset 값을 반환합니다.
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

/// 승인 요청 본문
///
/// `approver_id`는 토큰 클레임에서 행위자를 결정할 수 없을 때만
/// 사용되는 마지막 폴백입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApproveRequest {
    /// 명시적 승인자 ID (폴백용, 선택)
    pub approver_id: Option<String>,
}

/// 반려 요청 본문
///
/// 반려 사유는 필수이며, 공백만으로는 채울 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RejectRequest {
    /// 반려 사유 (필수)
    #[validate(length(min = 1, max = 1000, message = "반려 사유는 필수입니다"))]
    pub reason: String,
    /// 명시적 반려자 ID (폴백용, 선택)
    pub approver_id: Option<String>,
}

impl RejectRequest {
    /// 공백을 제거한 반려 사유를 반환합니다. 비어 있으면 None입니다.
    pub fn trimmed_reason(&self) -> Option<&str> {
        let trimmed = self.reason.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

/// ISO 4217 통화 코드 형식을 검증합니다. (알파벳 3글자)
pub fn validate_currency_code(currency: &str) -> Result<(), ValidationError> {
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new("invalid_currency")
            .with_message("통화 코드는 알파벳 3글자여야 합니다".into()));
    }
    Ok(())
}

/// 금액이 양수인지 검증합니다.
pub fn validate_positive_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::new("invalid_amount")
            .with_message("금액은 0보다 커야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_rules() {
        assert!(validate_currency_code("KRW").is_ok());
        assert!(validate_currency_code("usd").is_ok());
        assert!(validate_currency_code("KR").is_err());
        assert!(validate_currency_code("KRW1").is_err());
        assert!(validate_currency_code("₩₩₩").is_err());
    }

    #[test]
    fn test_positive_amount_rules() {
        assert!(validate_positive_amount(1500.0).is_ok());
        assert!(validate_positive_amount(0.0).is_err());
        assert!(validate_positive_amount(-10.0).is_err());
        assert!(validate_positive_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_page_query_defaults() {
        let query = PageQuery { limit: None, offset: None, status: None };
        assert_eq!(query.limit(), 20);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_page_query_clamps_limit() {
        let query = PageQuery { limit: Some(500), offset: Some(10), status: None };
        assert_eq!(query.limit(), 100);
        assert_eq!(query.offset(), 10);
    }

    #[test]
    fn test_reject_request_requires_non_blank_reason() {
        let req = RejectRequest { reason: "   ".to_string(), approver_id: None };
        assert!(req.trimmed_reason().is_none());

        let req = RejectRequest { reason: " 금액 불일치 ".to_string(), approver_id: None };
        assert_eq!(req.trimmed_reason(), Some("금액 불일치"));
    }

    #[test]
    fn test_reject_request_validation() {
        use validator::Validate;

        let req = RejectRequest { reason: String::new(), approver_id: None };
        assert!(req.validate().is_err());
    }
}
