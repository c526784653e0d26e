//! 첨부 파일 값 객체 모듈
//!
//! 영수증 이미지와 인보이스 PDF를 부모 문서 안에 내장하는
//! `Attachment` 값 객체를 정의합니다.

pub mod attachment;

pub use attachment::{Attachment, ReceiptAnalysis};
