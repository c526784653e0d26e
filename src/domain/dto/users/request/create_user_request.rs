//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 이메일 (`email`)
//! - RFC 5322 표준 이메일 형식 준수
//! - 중복 여부는 서비스 계층에서 별도 검증
//!
//! ### 이름 (`name`)
//! - 길이: 1-50자, 유니코드 문자 지원
//!
//! ### 비밀번호 (`password`)
//! - 최소 길이: 8자
//! - 필수 포함: 대문자, 소문자, 숫자
//!
//! ### 역할/회사 (`role`, `company_id`)
//! - `role = "company"`인 경우 `company_id` 필수 (구조체 수준 검증)

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::UserRole;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "finance@acme.com",
///   "name": "Acme Finance",
///   "password": "SecurePass123",
///   "role": "company",
///   "company_id": "acme"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_company_binding"))]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소
    ///
    /// 로그인 인증에 사용되며 시스템 내 유일성이 보장됩니다
    /// (서비스 계층 + MongoDB 유니크 인덱스).
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사용자 이름 (화면에 표시되는 이름)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 계정 비밀번호
    ///
    /// 해싱 후 저장되므로 평문으로 유지하지 않습니다.
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 사용자 역할
    pub role: UserRole,

    /// 소속 회사 ID
    ///
    /// `company` 역할은 필수이며, 다른 역할은 선택입니다.
    pub company_id: Option<String>,
}

/// 역할별 회사 바인딩을 검증하는 구조체 수준 검증 함수
///
/// `company` 역할의 사용자는 테넌트 스코프의 기준이 되는
/// `company_id` 없이는 생성할 수 없습니다.
fn validate_company_binding(req: &CreateUserRequest) -> Result<(), ValidationError> {
    if req.role == UserRole::Company {
        let missing = req
            .company_id
            .as_deref()
            .map(str::trim)
            .map_or(true, str::is_empty);

        if missing {
            return Err(ValidationError::new("company_id_required")
                .with_message("company 역할은 company_id가 필수입니다".into()));
        }
    }
    Ok(())
}

/// 비밀번호 보안 강도를 검증하는 함수
///
/// # 필수 요구사항
///
/// - **대문자**: 최소 1개 이상 (A-Z)
/// - **소문자**: 최소 1개 이상 (a-z)
/// - **숫자**: 최소 1개 이상 (0-9)
pub(crate) fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_digit(10));

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: UserRole, company_id: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            email: "finance@acme.com".to_string(),
            name: "Acme Finance".to_string(),
            password: "SecurePass123".to_string(),
            role,
            company_id: company_id.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_company_user() {
        assert!(request(UserRole::Company, Some("acme")).validate().is_ok());
    }

    #[test]
    fn test_company_role_requires_company_id() {
        assert!(request(UserRole::Company, None).validate().is_err());
        assert!(request(UserRole::Company, Some("  ")).validate().is_err());
    }

    #[test]
    fn test_admin_role_allows_missing_company_id() {
        assert!(request(UserRole::Admin, None).validate().is_ok());
    }

    #[test]
    fn test_password_strength_rules() {
        assert!(validate_password_strength("SecurePass123").is_ok());
        assert!(validate_password_strength("password123").is_err()); // 대문자 없음
        assert!(validate_password_strength("PASSWORD123").is_err()); // 소문자 없음
        assert!(validate_password_strength("MyPassword").is_err()); // 숫자 없음
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut req = request(UserRole::Employee, None);
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }
}
