use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::UserRole;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 토큰 검증 후 요청 확장에 저장하며,
/// 핸들러는 extractor 파라미터로 바로 받을 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 토큰 주체 (sub 클레임)
    pub sub: String,

    /// 사용자 역할
    pub role: UserRole,

    /// 소속 회사 ID (테넌트 스코프, admin은 None)
    pub company_id: Option<String>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// 주어진 회사 범위의 문서에 접근할 수 있는지 확인
    ///
    /// 관리자는 모든 테넌트에 접근할 수 있고,
    /// 그 외 역할은 자신의 `company_id`와 일치해야 합니다.
    pub fn can_access_company(&self, company_id: Option<&str>) -> bool {
        if self.is_admin() {
            return true;
        }
        match (self.company_id.as_deref(), company_id) {
            (Some(own), Some(target)) => own == target,
            // 회사 범위가 없는 문서는 관리자 전용
            _ => false,
        }
    }

    /// 승인/반려/지급 작업에서 기록할 행위자 ID를 결정합니다.
    ///
    /// `user_id` 클레임, `sub` 클레임, 요청 본문의 명시적 ID 순서로
    /// 비어 있지 않은 첫 값을 사용합니다.
    pub fn resolve_actor_id(&self, body_actor_id: Option<&str>) -> Option<String> {
        if !self.user_id.trim().is_empty() {
            return Some(self.user_id.clone());
        }
        if !self.sub.trim().is_empty() {
            return Some(self.sub.clone());
        }
        body_actor_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_id: &str, sub: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: user_id.to_string(),
            sub: sub.to_string(),
            role: UserRole::Company,
            company_id: Some("acme".to_string()),
        }
    }

    #[test]
    fn test_actor_id_prefers_user_id_claim() {
        let u = user("claim-user", "claim-sub");
        assert_eq!(
            u.resolve_actor_id(Some("body-id")),
            Some("claim-user".to_string())
        );
    }

    #[test]
    fn test_actor_id_falls_back_to_sub() {
        let u = user("", "claim-sub");
        assert_eq!(u.resolve_actor_id(None), Some("claim-sub".to_string()));
    }

    #[test]
    fn test_actor_id_falls_back_to_body_field() {
        let u = user("", "  ");
        assert_eq!(
            u.resolve_actor_id(Some("body-id")),
            Some("body-id".to_string())
        );
    }

    #[test]
    fn test_actor_id_none_when_all_empty() {
        let u = user("", "");
        assert_eq!(u.resolve_actor_id(Some("   ")), None);
        assert_eq!(u.resolve_actor_id(None), None);
    }

    #[test]
    fn test_company_scope_access() {
        let mut u = user("id", "id");
        assert!(u.can_access_company(Some("acme")));
        assert!(!u.can_access_company(Some("globex")));
        assert!(!u.can_access_company(None));

        u.role = UserRole::Admin;
        assert!(u.can_access_company(Some("globex")));
        assert!(u.can_access_company(None));
    }
}
