//! 사용자 부분 수정 요청 DTO
//!
//! `PATCH /api/v1/users/{id}`의 본문입니다. 모든 필드가 선택이며,
//! 전달된 필드만 갱신됩니다. 이메일, 역할, 비밀번호는 이 경로로
//! 변경할 수 없습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 부분 수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 변경할 이름
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: Option<String>,

    /// 계정 활성화 여부
    pub is_active: Option<bool>,

    /// 소속 회사 ID 변경
    pub company_id: Option<String>,
}

impl UpdateUserRequest {
    /// 갱신할 내용이 하나라도 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_active.is_none() && self.company_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_detected() {
        let req = UpdateUserRequest { name: None, is_active: None, company_id: None };
        assert!(req.is_empty());

        let req = UpdateUserRequest {
            name: None,
            is_active: Some(false),
            company_id: None,
        };
        assert!(!req.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let req = UpdateUserRequest {
            name: Some(String::new()),
            is_active: None,
            company_id: None,
        };
        assert!(req.validate().is_err());
    }
}
