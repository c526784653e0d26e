//! 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생성, 인증, 조회, 수정, 삭제를 담당하는 비즈니스 로직입니다.
//! 데이터 액세스는 [`UserRepository`]에 위임하고, 이 계층은
//! 비밀번호 해싱/검증과 권한 규칙을 책임집니다.

use std::sync::Arc;
use bcrypt::{hash, verify};
use mongodb::bson::{doc, DateTime};
use singleton_macro::service;

use crate::config::PasswordConfig;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{CreateUserResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 관리 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// [`UserRepository`]가 자동 주입됩니다.
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성
    ///
    /// 비밀번호를 bcrypt로 해싱한 뒤 저장합니다.
    /// 이메일 중복은 리포지토리에서 `ConflictError`로 거부됩니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.email,
            request.name,
            password_hash,
            request.role,
            request.company_id,
        );

        let created_user = self.user_repo.create(user).await?;

        log::info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// 이메일/비밀번호로 사용자 인증
    ///
    /// 로그인 엔드포인트에서 사용됩니다. 계정이 없거나 비밀번호가
    /// 틀리면 동일한 `AuthenticationError`를 반환하여 계정 존재 여부를
    /// 노출하지 않습니다. 비활성 계정도 로그인할 수 없습니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("이메일 또는 비밀번호가 올바르지 않습니다".to_string())
            })?;

        let valid = verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !valid {
            return Err(AppError::AuthenticationError(
                "이메일 또는 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        if !user.is_active {
            return Err(AppError::AuthenticationError(
                "비활성화된 계정입니다".to_string(),
            ));
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 목록 조회 (관리자 전용 라우트에서 호출)
    pub async fn list_users(&self, limit: i64, offset: u64) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_page(limit, offset).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 부분 수정
    ///
    /// 관리자이거나 본인 계정인 경우에만 허용됩니다.
    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
        actor: &AuthenticatedUser,
    ) -> Result<UserResponse, AppError> {
        if !actor.is_admin() && actor.user_id != id {
            return Err(AppError::AuthorizationError(
                "다른 사용자의 정보를 수정할 수 없습니다".to_string(),
            ));
        }

        if request.is_empty() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        let mut update_doc = doc! { "updated_at": DateTime::now() };
        if let Some(name) = request.name {
            update_doc.insert("name", name);
        }
        if let Some(is_active) = request.is_active {
            update_doc.insert("is_active", is_active);
        }
        if let Some(company_id) = request.company_id {
            update_doc.insert("company_id", company_id);
        }

        let updated = self.user_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제 (관리자 전용 라우트에서 호출)
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("삭제할 사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("사용자 삭제 완료: {}", id);
        Ok(())
    }
}
