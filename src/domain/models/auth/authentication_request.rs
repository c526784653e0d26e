use crate::config::UserRole;

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 라우트 가드가 요구하는 역할 정보
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(UserRole),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<UserRole>),
}

impl RequiredRole {
    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, user_role: UserRole) -> bool {
        match self {
            RequiredRole::Single(required) => user_role == *required,
            RequiredRole::Any(required_roles) => required_roles.contains(&user_role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_role_requirement() {
        let guard = RequiredRole::Single(UserRole::Admin);
        assert!(guard.is_satisfied(UserRole::Admin));
        assert!(!guard.is_satisfied(UserRole::Company));
    }

    #[test]
    fn test_any_role_requirement() {
        let guard = RequiredRole::Any(vec![UserRole::Admin, UserRole::Company]);
        assert!(guard.is_satisfied(UserRole::Admin));
        assert!(guard.is_satisfied(UserRole::Company));
        assert!(!guard.is_satisfied(UserRole::Employee));
        assert!(!guard.is_satisfied(UserRole::Provider));
    }

    #[test]
    fn test_empty_any_requirement_rejects_everyone() {
        let guard = RequiredRole::Any(vec![]);
        assert!(!guard.is_satisfied(UserRole::Admin));
    }
}
