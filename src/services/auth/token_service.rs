//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256 서명 기반의 액세스 토큰 생성과 검증을 담당합니다.
//! 클레임에는 사용자 ID, 역할, 테넌트 스코프(`company_id`)가 포함되어
//! 미들웨어와 서비스 계층의 권한 검사에 사용됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::token::TokenClaims;

/// JWT 토큰 관리 서비스
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// `sub`와 `user_id`에 동일한 사용자 ID를 기록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let claims = build_claims(user, JwtConfig::expiration_hours())?;
        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰의 만료 시간(초)을 반환합니다.
    pub fn expires_in_seconds(&self) -> i64 {
        JwtConfig::expiration_hours() * 3600
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서
    /// 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        parse_bearer(auth_header)
    }
}

/// 사용자 정보로 토큰 클레임을 구성합니다.
///
/// `sub`와 `user_id`에 동일한 사용자 ID가 기록됩니다.
fn build_claims(user: &User, expiration_hours: i64) -> Result<TokenClaims, AppError> {
    let now = Utc::now();
    let expiration = now + Duration::hours(expiration_hours);

    let user_id = user.id_string().ok_or_else(|| {
        AppError::InternalError("사용자 ID가 없습니다".to_string())
    })?;

    Ok(TokenClaims {
        sub: user_id.clone(),
        user_id,
        role: user.role,
        company_id: user.company_id.clone(),
        iat: now.timestamp(),
        exp: expiration.timestamp(),
    })
}

/// "Bearer {token}" 헤더에서 토큰 부분을 추출합니다.
fn parse_bearer(auth_header: &str) -> Result<&str, AppError> {
    if auth_header.starts_with("Bearer ") {
        Ok(&auth_header[7..])
    } else {
        Err(AppError::AuthenticationError(
            "유효하지 않은 인증 헤더 형식입니다".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserRole;

    fn user() -> User {
        let mut user = User::new(
            "finance@acme.com".to_string(),
            "Acme Finance".to_string(),
            "$2b$04$hash".to_string(),
            UserRole::Company,
            Some("acme".to_string()),
        );
        user.id = Some(mongodb::bson::oid::ObjectId::new());
        user
    }

    #[test]
    fn test_claims_roundtrip() {
        let user = user();
        let claims = build_claims(&user, 24).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.user_id, claims.sub);
        assert_eq!(claims.role, UserRole::Company);
        assert_eq!(claims.company_id.as_deref(), Some("acme"));
        assert_eq!(claims.exp - claims.iat, 24 * 3600);

        // 고정 키로 서명/검증 왕복
        let secret = "test-secret";
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap();
        let decoded = decode::<TokenClaims>(
            &token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
        .unwrap()
        .claims;

        assert_eq!(decoded.user_id, claims.user_id);
        assert_eq!(decoded.role, claims.role);
        assert_eq!(decoded.company_id, claims.company_id);
    }

    #[test]
    fn test_user_without_id_cannot_get_claims() {
        let mut user = user();
        user.id = None;

        assert!(build_claims(&user, 24).is_err());
    }

    #[test]
    fn test_bearer_header_parsing() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(parse_bearer("Basic abc").is_err());
        assert!(parse_bearer("abc.def.ghi").is_err());
    }
}
