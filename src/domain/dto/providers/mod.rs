//! 공급자 요청/응답 DTO 모듈

use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use validator::Validate;

use crate::domain::entities::providers::provider::Provider;

/// 공급자 생성 요청 DTO
///
/// `company_id`는 본문이 아니라 호출자의 토큰 스코프에서 결정됩니다.
/// (admin만 본문으로 다른 회사를 지정할 수 있습니다.)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProviderRequest {
    /// 공급자 상호
    #[validate(length(min = 1, max = 100, message = "상호는 1-100자 사이여야 합니다"))]
    pub name: String,

    /// 공급자 이메일 (unique)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사업자 등록번호
    pub tax_id: Option<String>,

    /// 담당자 이름
    pub contact_name: Option<String>,

    /// 담당자 연락처
    pub phone: Option<String>,

    /// 대상 회사 ID (admin 전용 오버라이드)
    pub company_id: Option<String>,
}

/// 공급자 부분 수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProviderRequest {
    #[validate(length(min = 1, max = 100, message = "상호는 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    pub tax_id: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateProviderRequest {
    /// 갱신할 내용이 하나라도 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tax_id.is_none()
            && self.contact_name.is_none()
            && self.phone.is_none()
            && self.is_active.is_none()
    }
}

/// 공급자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tax_id: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub company_id: String,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Provider> for ProviderResponse {
    fn from(provider: Provider) -> Self {
        let Provider {
            id,
            name,
            email,
            tax_id,
            contact_name,
            phone,
            company_id,
            is_active,
            created_at,
            updated_at,
        } = provider;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            tax_id,
            contact_name,
            phone,
            company_id,
            is_active,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_request_validation() {
        let req = CreateProviderRequest {
            name: "공급자상사".to_string(),
            email: "vendor@example.com".to_string(),
            tax_id: None,
            contact_name: None,
            phone: None,
            company_id: None,
        };
        assert!(req.validate().is_ok());

        let req = CreateProviderRequest {
            name: String::new(),
            email: "vendor@example.com".to_string(),
            tax_id: None,
            contact_name: None,
            phone: None,
            company_id: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_update_detected() {
        let req = UpdateProviderRequest {
            name: None,
            tax_id: None,
            contact_name: None,
            phone: None,
            is_active: None,
        };
        assert!(req.is_empty());
    }
}
