//! 공급자 관리 서비스 구현
//!
//! 공급자(거래처)의 등록, 조회, 수정, 삭제를 담당합니다.
//! 모든 작업은 호출자의 테넌트 범위(`company_id`) 안에서만 허용되며,
//! 관리자만 범위를 넘어 접근할 수 있습니다.

use std::sync::Arc;
use mongodb::bson::{doc, DateTime, Document};
use singleton_macro::service;

use crate::core::errors::AppError;
use crate::domain::dto::providers::{CreateProviderRequest, ProviderResponse, UpdateProviderRequest};
use crate::domain::entities::providers::provider::Provider;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::repositories::providers::provider_repo::ProviderRepository;

/// 공급자 관리 서비스
#[service(name = "provider")]
pub struct ProviderService {
    /// 공급자 데이터 액세스 리포지토리 (자동 주입)
    provider_repo: Arc<ProviderRepository>,
}

impl ProviderService {
    /// 새 공급자 등록
    ///
    /// 일반 사용자는 자신의 토큰 스코프(`company_id`)에 등록되고,
    /// 관리자는 요청 본문으로 대상 회사를 지정해야 합니다.
    pub async fn create_provider(
        &self,
        request: CreateProviderRequest,
        actor: &AuthenticatedUser,
    ) -> Result<ProviderResponse, AppError> {
        let company_id = self.resolve_company_id(request.company_id.as_deref(), actor)?;

        let provider = Provider::new(
            request.name,
            request.email,
            company_id,
            request.tax_id,
            request.contact_name,
            request.phone,
        );

        let created = self.provider_repo.create(provider).await?;

        log::info!("📦 New provider registered: {}", created.email);

        Ok(ProviderResponse::from(created))
    }

    /// ID로 공급자 조회
    ///
    /// 다른 회사의 공급자는 존재 여부를 노출하지 않기 위해
    /// `NotFound`로 처리합니다.
    pub async fn get_provider(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<ProviderResponse, AppError> {
        let provider = self.find_scoped(id, actor).await?;
        Ok(ProviderResponse::from(provider))
    }

    /// 공급자 목록 조회 (테넌트 범위, 최신 생성 순)
    pub async fn list_providers(
        &self,
        limit: i64,
        offset: u64,
        actor: &AuthenticatedUser,
    ) -> Result<Vec<ProviderResponse>, AppError> {
        let filter = self.scope_filter(actor)?;
        let providers = self.provider_repo.find_page(filter, limit, offset).await?;
        Ok(providers.into_iter().map(ProviderResponse::from).collect())
    }

    /// 공급자 부분 수정
    pub async fn update_provider(
        &self,
        id: &str,
        request: UpdateProviderRequest,
        actor: &AuthenticatedUser,
    ) -> Result<ProviderResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError("수정할 필드가 없습니다".to_string()));
        }

        // 범위 확인 후 갱신
        self.find_scoped(id, actor).await?;

        let mut update_doc = Document::new();
        if let Some(name) = request.name {
            update_doc.insert("name", name);
        }
        if let Some(tax_id) = request.tax_id {
            update_doc.insert("tax_id", tax_id);
        }
        if let Some(contact_name) = request.contact_name {
            update_doc.insert("contact_name", contact_name);
        }
        if let Some(phone) = request.phone {
            update_doc.insert("phone", phone);
        }
        if let Some(is_active) = request.is_active {
            update_doc.insert("is_active", is_active);
        }
        update_doc.insert("updated_at", DateTime::now());

        let updated = self.provider_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("공급자를 찾을 수 없습니다".to_string()))?;

        Ok(ProviderResponse::from(updated))
    }

    /// 공급자 삭제
    pub async fn delete_provider(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<(), AppError> {
        self.find_scoped(id, actor).await?;

        let deleted = self.provider_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("공급자를 찾을 수 없습니다".to_string()));
        }

        log::info!("🗑️ Provider deleted: {}", id);

        Ok(())
    }

    /// 테넌트 범위 내에서 공급자를 조회합니다.
    async fn find_scoped(
        &self,
        id: &str,
        actor: &AuthenticatedUser,
    ) -> Result<Provider, AppError> {
        let provider = self.provider_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("공급자를 찾을 수 없습니다".to_string()))?;

        if !actor.can_access_company(Some(&provider.company_id)) {
            return Err(AppError::NotFound("공급자를 찾을 수 없습니다".to_string()));
        }

        Ok(provider)
    }

    /// 목록 조회용 테넌트 필터를 구성합니다.
    fn scope_filter(&self, actor: &AuthenticatedUser) -> Result<Document, AppError> {
        scope_filter(actor)
    }

    /// 생성 시 소속 회사를 결정합니다.
    fn resolve_company_id(
        &self,
        body_company_id: Option<&str>,
        actor: &AuthenticatedUser,
    ) -> Result<String, AppError> {
        resolve_company_id(body_company_id, actor)
    }
}

/// 목록 조회용 테넌트 필터
///
/// 관리자는 전체 범위, 그 외 역할은 자신의 `company_id` 범위입니다.
fn scope_filter(actor: &AuthenticatedUser) -> Result<Document, AppError> {
    if actor.is_admin() {
        return Ok(doc! {});
    }

    let company_id = actor.company_id.as_deref().ok_or_else(|| {
        AppError::AuthorizationError("회사 범위가 없는 계정입니다".to_string())
    })?;

    Ok(doc! { "company_id": company_id })
}

/// 생성 시 소속 회사를 결정합니다.
///
/// 관리자는 본문의 `company_id`가 필수이고,
/// 그 외 역할은 토큰 스코프가 우선합니다.
fn resolve_company_id(
    body_company_id: Option<&str>,
    actor: &AuthenticatedUser,
) -> Result<String, AppError> {
    if actor.is_admin() {
        return body_company_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::ValidationError("company_id를 지정해야 합니다".to_string())
            });
    }

    actor.company_id.clone().ok_or_else(|| {
        AppError::AuthorizationError("회사 범위가 없는 계정입니다".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserRole;

    fn actor(role: UserRole, company_id: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "actor".to_string(),
            sub: "actor".to_string(),
            role,
            company_id: company_id.map(str::to_string),
        }
    }

    #[test]
    fn test_company_user_scoped_to_own_tenant() {
        let actor = actor(UserRole::Company, Some("acme"));

        // 본문의 다른 회사 지정은 무시됩니다.
        let resolved = resolve_company_id(Some("globex"), &actor).unwrap();
        assert_eq!(resolved, "acme");

        let filter = scope_filter(&actor).unwrap();
        assert_eq!(filter, doc! { "company_id": "acme" });
    }

    #[test]
    fn test_admin_requires_explicit_company() {
        let actor = actor(UserRole::Admin, None);

        assert!(resolve_company_id(None, &actor).is_err());
        assert!(resolve_company_id(Some("  "), &actor).is_err());
        assert_eq!(
            resolve_company_id(Some("globex"), &actor).unwrap(),
            "globex"
        );

        // 관리자 목록 조회는 전체 범위
        assert_eq!(scope_filter(&actor).unwrap(), doc! {});
    }

    #[test]
    fn test_scopeless_account_rejected() {
        let actor = actor(UserRole::Employee, None);

        assert!(resolve_company_id(None, &actor).is_err());
        assert!(scope_filter(&actor).is_err());
    }
}
