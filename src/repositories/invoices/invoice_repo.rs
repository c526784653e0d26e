//! # 인보이스 리포지토리 구현
//!
//! 인보이스 엔티티의 데이터 액세스 계층입니다.
//!
//! ## 캐싱 전략
//!
//! 단건 조회는 `invoice:{id}` 키로 10분 캐싱합니다. 첨부 PDF가 포함된
//! 문서는 수 MB까지 커질 수 있으므로, 첨부가 없는 문서만 캐시에 올립니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::invoices::invoice::Invoice,
};

/// 인보이스 데이터 액세스 리포지토리
#[repository(name = "invoice", collection = "invoices")]
pub struct InvoiceRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl InvoiceRepository {
    /// ID로 인보이스 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Invoice>(&cache_key).await {
            return Ok(Some(cached));
        }

        let invoice = self.collection::<Invoice>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 첨부가 없는 가벼운 문서만 캐싱
        if let Some(ref invoice) = invoice {
            if invoice.document.is_none() && invoice.acceptance_document.is_none() {
                let _ = self.redis
                    .set_with_expiry(&cache_key, invoice, 600)
                    .await;
            }
        }

        Ok(invoice)
    }

    /// 회사 범위 안의 인보이스 번호로 조회 (중복 검사용)
    pub async fn find_by_number(
        &self,
        company_id: &str,
        invoice_number: &str,
    ) -> Result<Option<Invoice>, AppError> {
        self.collection::<Invoice>()
            .find_one(doc! { "company_id": company_id, "invoice_number": invoice_number })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터 조건에 맞는 인보이스 목록 페이지 조회 (최신 생성 순)
    pub async fn find_page(
        &self,
        filter: Document,
        limit: i64,
        offset: u64,
    ) -> Result<Vec<Invoice>, AppError> {
        let cursor = self.collection::<Invoice>()
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

    /// 새 인보이스 생성
    ///
    /// 같은 회사에 동일한 인보이스 번호가 있으면 `ConflictError`를 반환합니다.
    pub async fn create(&self, mut invoice: Invoice) -> Result<Invoice, AppError> {
        if self
            .find_by_number(&invoice.company_id, &invoice.invoice_number)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(
                "이미 존재하는 인보이스 번호입니다".to_string(),
            ));
        }

        let result = self.collection::<Invoice>()
            .insert_one(&invoice)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        invoice.id = Some(result.inserted_id.as_object_id().unwrap());

        let _ = self.invalidate_collection_cache(None).await;

        Ok(invoice)
    }

    /// 인보이스 부분 업데이트 (`$set`), 갱신된 문서를 반환
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Invoice>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Invoice>()
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
    /// Rejected 인보이스를 수정하여 Draft로 복귀시킬 때 사용합니다.
    pub async fn update_with_unset(
        &self,
        id: &str,
        set_doc: Document,
        unset_doc: Document,
    ) -> Result<Option<Invoice>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Invoice>()
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

    /// 인보이스 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Invoice>()
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
        let collection = self.collection::<Invoice>();

        // 회사 범위 인보이스 번호 복합 유니크 인덱스
        let number_index = IndexModel::builder()
            .keys(doc! { "company_id": 1, "invoice_number": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("company_invoice_number_unique".to_string())
                .build())
            .build();

        // 회사 범위 + 상태 필터 목록 조회 인덱스
        let scope_index = IndexModel::builder()
            .keys(doc! { "company_id": 1, "status": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("company_status_created_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([number_index, scope_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
