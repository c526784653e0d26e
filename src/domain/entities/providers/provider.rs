//! Provider Entity Implementation
//!
//! 인보이스를 발행하는 공급자(거래처) 엔티티입니다.
//! 모든 공급자는 하나의 회사(테넌트)에 소속됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 공급자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 공급자 상호
    pub name: String,
    /// 공급자 이메일 (unique)
    pub email: String,
    /// 사업자 등록번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// 담당자 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    /// 담당자 연락처
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 소속 회사 ID (테넌트 스코프)
    pub company_id: String,
    /// 거래 가능 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Provider {
    /// 새 공급자 생성
    pub fn new(
        name: String,
        email: String,
        company_id: String,
        tax_id: Option<String>,
        contact_name: Option<String>,
        phone: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            tax_id,
            contact_name,
            phone,
            company_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
