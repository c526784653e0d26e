//! # 지출 리포지토리 구현
//!
//! 지출 엔티티의 데이터 액세스 계층입니다. 워크플로우 상태 전이와
//! 첨부 파일 저장은 모두 `$set` 업데이트 하나로 원자적으로 반영됩니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::expenses::expense::Expense,
};

/// 지출 데이터 액세스 리포지토리
#[repository(name = "expense", collection = "expenses")]
pub struct ExpenseRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl ExpenseRepository {
    /// ID로 지출 조회 (캐시 우선)
    ///
    /// 첨부 파일이 포함된 문서는 크기가 클 수 있어 캐시에는
    /// 저장하지 않고 DB에서 직접 읽습니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Expense>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<Expense>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터 조건에 맞는 지출 목록 페이지 조회 (최신 생성 순)
    ///
    /// 서비스 계층이 테넌트 범위(`company_id`)와 상태 필터를
    /// Document로 조합하여 전달합니다.
    pub async fn find_page(
        &self,
        filter: Document,
        limit: i64,
        offset: u64,
    ) -> Result<Vec<Expense>, AppError> {
        let cursor = self.collection::<Expense>()
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

    /// 새 지출 생성
    pub async fn create(&self, mut expense: Expense) -> Result<Expense, AppError> {
        let result = self.collection::<Expense>()
            .insert_one(&expense)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        expense.id = Some(result.inserted_id.as_object_id().unwrap());

        let _ = self.invalidate_collection_cache(None).await;

        Ok(expense)
    }

    /// 지출 부분 업데이트 (`$set`), 갱신된 문서를 반환
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Expense>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Expense>()
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

    /// 필드 제거를 포함한 업데이트
    ///
    /// Rejected 문서를 수정하여 Draft로 복귀시킬 때
    /// `rejection_reason`, `approved_by` 필드를 `$unset`으로 함께 제거합니다.
    pub async fn update_with_unset(
        &self,
        id: &str,
        set_doc: Document,
        unset_doc: Document,
    ) -> Result<Option<Expense>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Expense>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": set_doc, "$unset": unset_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated)
    }

    /// 지출 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Expense>()
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
        let collection = self.collection::<Expense>();

        // 회사 범위 + 상태 필터 목록 조회 인덱스
        let scope_index = IndexModel::builder()
            .keys(doc! { "company_id": 1, "status": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("company_status_created_at".to_string())
                .build())
            .build();

        // 제출자 조회 인덱스
        let submitter_index = IndexModel::builder()
            .keys(doc! { "submitted_by": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("submitted_by_created_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([scope_index, submitter_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
