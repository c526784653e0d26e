//! User Entity Implementation
//!
//! 백오피스 사용자 엔티티의 핵심 구현체입니다.
//! 역할 기반 접근 제어와 회사(테넌트) 스코프를 지원합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::UserRole;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// `company` 역할의 사용자는 반드시 `company_id`를 가져야 하며,
/// 이 값이 테넌트 스코프의 기준이 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름
    pub name: String,
    /// 해시된 비밀번호
    ///
    /// API 응답에는 `UserResponse` 변환 과정에서 제외됩니다.
    pub password_hash: String,
    /// 사용자 역할
    pub role: UserRole,
    /// 소속 회사 ID (company 역할은 필수)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    pub fn new(
        email: String,
        name: String,
        password_hash: String,
        role: UserRole,
        company_id: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            name,
            password_hash,
            role,
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

    /// 관리자 계정인지 확인
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
