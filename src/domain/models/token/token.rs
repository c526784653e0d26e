//! JWT 인증 토큰 구조체
//!
//! RFC 7519 JWT 표준 클레임과 백오피스 특화 클레임을 정의합니다.

use serde::{Deserialize, Serialize};
use crate::config::UserRole;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `user_id`: 사용자 ID (sub와 동일하지만 명시적 접근용)
/// - `role`: 사용자 역할 (권한 기반 접근 제어용)
/// - `company_id`: 소속 회사 ID (테넌트 스코프, admin은 None)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 ID (sub와 동일)
    pub user_id: String,
    /// 사용자 역할
    pub role: UserRole,
    /// 소속 회사 ID (테넌트 스코프)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 응답 구조체
///
/// 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용)
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

impl TokenPair {
    /// Bearer 타입의 토큰 쌍을 생성합니다.
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
