//! # 공급자 리포지토리 구현
//!
//! 공급자 엔티티의 데이터 액세스 계층입니다. 목록 조회는 항상
//! `company_id` 필터가 포함된 Document를 받아 테넌트 범위를 유지합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::providers::provider::Provider,
};

/// 공급자 데이터 액세스 리포지토리
#[repository(name = "provider", collection = "providers")]
pub struct ProviderRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl ProviderRepository {
    /// ID로 공급자 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Provider>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Provider>(&cache_key).await {
            return Ok(Some(cached));
        }

        let provider = self.collection::<Provider>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref provider) = provider {
            let _ = self.redis
                .set_with_expiry(&cache_key, provider, 600)
                .await;
        }

        Ok(provider)
    }

    /// 이메일로 공급자 조회 (중복 검사용, 캐싱 없음)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Provider>, AppError> {
        self.collection::<Provider>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터 조건에 맞는 공급자 목록 페이지 조회 (최신 생성 순)
    pub async fn find_page(
        &self,
        filter: Document,
        limit: i64,
        offset: u64,
    ) -> Result<Vec<Provider>, AppError> {
        let cursor = self.collection::<Provider>()
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(offset)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 공급자 생성
    ///
    /// 이메일 중복 시 `ConflictError`를 반환합니다.
    pub async fn create(&self, mut provider: Provider) -> Result<Provider, AppError> {
        if self.find_by_email(&provider.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 등록된 공급자 이메일입니다".to_string()));
        }

        let result = self.collection::<Provider>()
            .insert_one(&provider)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        provider.id = Some(result.inserted_id.as_object_id().unwrap());

        let _ = self.invalidate_collection_cache(None).await;

        Ok(provider)
    }

    /// 공급자 부분 업데이트 (`$set`), 갱신된 문서를 반환
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Provider>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Provider>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated)
    }

    /// 공급자 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Provider>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Provider>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 회사 범위 목록 조회 인덱스
        let company_index = IndexModel::builder()
            .keys(doc! { "company_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("company_created_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, company_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
