//! 공급자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`ProviderRepository`](provider_repo::ProviderRepository)를 통해
//! 회사(테넌트) 범위로 스코프된 공급자 데이터를 관리합니다.

pub mod provider_repo;
