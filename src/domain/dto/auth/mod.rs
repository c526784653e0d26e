//! 인증 관련 요청/응답 DTO 모듈
//!
//! 로그인과 토큰 검증 엔드포인트의 계약을 정의합니다.
//! 로그인 성공 응답은 [`crate::domain::dto::users::response::LoginResponse`]를 사용합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::UserRole;
use crate::domain::models::token::TokenClaims;

/// 로그인 요청 DTO
///
/// ```json
/// { "email": "finance@acme.com", "password": "SecurePass123" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 로그인 이메일
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
    /// 비밀번호 (평문, TLS 구간에서만 전송)
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 토큰 검증 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyTokenRequest {
    /// 검증할 액세스 토큰
    #[validate(length(min = 1, message = "토큰을 입력해주세요"))]
    pub token: String,
}

/// 토큰 검증 응답 DTO
///
/// 서명과 만료 검증을 통과한 토큰의 클레임을 그대로 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub user_id: String,
    pub role: UserRole,
    pub company_id: Option<String>,
    pub expires_at: i64,
}

impl From<TokenClaims> for VerifyTokenResponse {
    fn from(claims: TokenClaims) -> Self {
        Self {
            valid: true,
            user_id: claims.user_id,
            role: claims.role,
            company_id: claims.company_id,
            expires_at: claims.exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let req = LoginRequest {
            email: "finance@acme.com".to_string(),
            password: "SecurePass123".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "SecurePass123".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            email: "finance@acme.com".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
