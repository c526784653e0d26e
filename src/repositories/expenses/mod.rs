//! 지출 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`ExpenseRepository`](expense_repo::ExpenseRepository)를 통해
//! 승인 워크플로우 상태를 가진 지출 문서를 관리합니다.

pub mod expense_repo;
