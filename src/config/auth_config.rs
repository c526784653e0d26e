//! # Authentication Configuration Module
//!
//! JWT 토큰 설정과 역할(Role) 체계를 관리하는 모듈입니다.
//! 백오피스 서비스의 모든 인증/인가 관련 설정이 여기에 모입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, UserRole};
//!
//! // JWT 토큰 생성 설정
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//!
//! // 역할 파싱
//! let role = UserRole::from_str("company")?;
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 생성, 검증, 만료 시간 등을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 개발은 길게, 프로덕션은 짧게
/// 3. **환경별로 다른 키 사용**
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// export JWT_SECRET="..."
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 권장 설정값
    ///
    /// - **개발**: 24시간 (편의성 우선)
    /// - **프로덕션**: 1시간 이하 (보안 우선)
    ///
    /// 기본값: 24시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 백오피스 사용자 역할을 나타내는 열거형
///
/// 라우트 가드와 서비스 계층의 권한 검사에 공통으로 사용됩니다.
/// `serde`를 통해 소문자 문자열로 직렬화되므로 JWT 클레임이나
/// MongoDB 문서에 그대로 저장할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// 시스템 관리자
    ///
    /// 모든 테넌트의 데이터를 조회/수정할 수 있으며,
    /// 사용자 목록 조회와 삭제 등 관리 작업을 수행합니다.
    Admin,

    /// 회사(테넌트) 계정
    ///
    /// 자신의 `company_id` 범위 안에서 공급자/지출/인보이스를 관리하고
    /// 승인 워크플로우를 진행합니다. 가입 시 `company_id`가 필수입니다.
    Company,

    /// 공급자 계정
    ///
    /// 자신이 연관된 인보이스/지출을 조회할 수 있는 읽기 위주 역할입니다.
    Provider,

    /// 일반 직원 계정
    ///
    /// 지출을 작성하고 제출할 수 있지만 승인 권한은 없습니다.
    Employee,
}

impl UserRole {
    /// 문자열에서 UserRole을 생성합니다. (대소문자 무관)
    ///
    /// # 지원되는 값
    ///
    /// - `"admin"` → `UserRole::Admin`
    /// - `"company"` → `UserRole::Company`
    /// - `"provider"` → `UserRole::Provider`
    /// - `"employee"` → `UserRole::Employee`
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "company" => Ok(UserRole::Company),
            "provider" => Ok(UserRole::Provider),
            "employee" => Ok(UserRole::Employee),
            _ => Err(format!("Unsupported user role: {}", s)),
        }
    }

    /// UserRole을 소문자 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Company => "company",
            UserRole::Provider => "provider",
            UserRole::Employee => "employee",
        }
    }

    /// 승인/반려/지급 처리 권한이 있는 역할인지 확인합니다.
    pub fn can_approve(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_string() {
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::from_str("company").unwrap(), UserRole::Company);
        assert_eq!(UserRole::from_str("provider").unwrap(), UserRole::Provider);
        assert_eq!(UserRole::from_str("employee").unwrap(), UserRole::Employee);

        // 대소문자 무관 테스트
        assert_eq!(UserRole::from_str("ADMIN").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::from_str("Company").unwrap(), UserRole::Company);

        // 지원하지 않는 역할 테스트
        assert!(UserRole::from_str("superuser").is_err());
        assert!(UserRole::from_str("").is_err());
    }

    #[test]
    fn test_user_role_as_string() {
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::Company.as_str(), "company");
        assert_eq!(UserRole::Provider.as_str(), "provider");
        assert_eq!(UserRole::Employee.as_str(), "employee");
    }

    #[test]
    fn test_user_role_roundtrip() {
        let roles = ["admin", "company", "provider", "employee"];

        for &role_str in &roles {
            let role = UserRole::from_str(role_str).unwrap();
            assert_eq!(role.as_str(), role_str);
        }
    }

    #[test]
    fn test_user_role_serialization() {
        let role = UserRole::Company;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"company\"");

        let deserialized: UserRole = serde_json::from_str(&json).unwrap();
        assert_eq!(role, deserialized);
    }

    #[test]
    fn test_approval_capable_roles() {
        assert!(UserRole::Admin.can_approve());
        assert!(UserRole::Company.can_approve());
        assert!(!UserRole::Provider.can_approve());
        assert!(!UserRole::Employee.can_approve());
    }
}
