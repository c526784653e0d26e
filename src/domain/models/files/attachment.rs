//! 내장 첨부 파일 값 객체
//!
//! 영수증 이미지(jpeg/png)와 인보이스 PDF는 별도 스토리지 없이
//! 부모 MongoDB 문서에 base64 문자열로 내장됩니다. 업로드 크기는
//! [`crate::config::UploadConfig`]의 상한으로 제한되므로 16 MB 문서
//! 제한 안에서 동작합니다.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};

/// 문서에 내장되는 첨부 파일
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// 업로드 당시의 원본 파일명
    pub filename: String,
    /// MIME 타입 (`image/jpeg`, `image/png`, `application/pdf`)
    pub content_type: String,
    /// base64로 인코딩된 파일 내용
    pub data: String,
    /// 원본 파일 크기 (바이트)
    pub size: u64,
    /// 업로드한 사용자 ID
    pub uploaded_by: String,
    /// 업로드 시간
    pub uploaded_at: DateTime,
}

impl Attachment {
    /// 원본 바이트에서 첨부 파일을 생성합니다.
    pub fn from_bytes(
        filename: String,
        content_type: String,
        bytes: &[u8],
        uploaded_by: String,
    ) -> Self {
        Self {
            filename,
            content_type,
            data: BASE64.encode(bytes),
            size: bytes.len() as u64,
            uploaded_by,
            uploaded_at: DateTime::now(),
        }
    }

    /// 저장된 base64 데이터를 원본 바이트로 복원합니다.
    ///
    /// 다운로드 핸들러가 byte-stream 응답을 만들 때 사용합니다.
    pub fn decode(&self) -> AppResult<Vec<u8>> {
        BASE64
            .decode(&self.data)
            .map_err(|e| AppError::InternalError(format!("첨부 파일 디코딩 실패: {}", e)))
    }
}

/// 영수증 이미지 분석 결과
///
/// 영수증 업로드 시 클라이언트(또는 별도 분석 파이프라인)가 함께 전달한
/// 분석 필드를 지출 문서에 그대로 기록합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptAnalysis {
    /// 가맹점 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    /// 인식된 총액
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// 인식된 결제 일자 (ISO 8601 문자열)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// 인식된 통화 코드
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_from_bytes_roundtrip() {
        let bytes = b"%PDF-1.7 fake invoice document";
        let attachment = Attachment::from_bytes(
            "invoice.pdf".to_string(),
            "application/pdf".to_string(),
            bytes,
            "665f1f77bcf86cd799439011".to_string(),
        );

        assert_eq!(attachment.size, bytes.len() as u64);
        assert_eq!(attachment.content_type, "application/pdf");
        assert_eq!(attachment.decode().unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_attachment_decode_rejects_corrupt_data() {
        let mut attachment = Attachment::from_bytes(
            "receipt.png".to_string(),
            "image/png".to_string(),
            b"png-bytes",
            "user".to_string(),
        );
        attachment.data = "not-valid-base64!!!".to_string();

        assert!(attachment.decode().is_err());
    }
}
