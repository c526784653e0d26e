//! 인보이스 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`InvoiceRepository`](invoice_repo::InvoiceRepository)를 통해
//! 승인/지급 워크플로우 상태를 가진 인보이스 문서를 관리합니다.
//! `(company_id, invoice_number)` 복합 유니크 인덱스로 회사 범위의
//! 인보이스 번호 중복을 방지합니다.

pub mod invoice_repo;
