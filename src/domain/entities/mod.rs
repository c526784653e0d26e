//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 컬렉션과 직접 매핑되는 문서 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## 컬렉션 매핑
//!
//! | 엔티티 | 컬렉션 | 유니크 인덱스 |
//! |--------|--------|----------------|
//! | `User` | `users` | `email` |
//! | `Provider` | `providers` | `email` |
//! | `Expense` | `expenses` | - |
//! | `Invoice` | `invoices` | `(company_id, invoice_number)` |
//!
//! ## 싱글톤 매크로 연동
//!
//! 이 엔티티들은 `#[repository]` 매크로와 함께 사용됩니다:
//! ```rust,ignore
//! use crate::domain::entities::invoices::invoice::Invoice;
//!
//! #[repository(name = "invoice_repository", collection = "invoices")]
//! pub struct InvoiceRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//! ```

pub mod users;
pub mod providers;
pub mod expenses;
pub mod invoices;
