//! Multipart 업로드 공통 처리
//!
//! 영수증 이미지와 인보이스 PDF 업로드가 같은 절차를 공유합니다:
//! 필드 스트리밍, MIME 타입 화이트리스트 검사, 업로드 크기 상한 적용.
//! 파일 필드 외에 `analysis` 같은 텍스트 필드도 함께 수집합니다.

use actix_multipart::Multipart;
use futures_util::StreamExt;

use crate::config::UploadConfig;
use crate::core::errors::{AppError, AppResult};

/// 영수증 이미지로 허용되는 MIME 타입
pub const IMAGE_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// 인보이스 문서로 허용되는 MIME 타입
pub const PDF_CONTENT_TYPES: &[&str] = &["application/pdf"];

/// 메모리에 수집된 업로드 파일
#[derive(Debug)]
pub struct UploadedFile {
    /// 클라이언트가 보낸 원본 파일명
    pub filename: String,
    /// 검증된 MIME 타입
    pub content_type: String,
    /// 파일 내용 (크기 상한 이내)
    pub bytes: Vec<u8>,
}

/// Multipart 본문에서 파일 필드 하나를 읽어들입니다.
///
/// `file_field` 이름의 파일 필드는 필수이며, `allowed_types`에 없는
/// MIME 타입이거나 [`UploadConfig::max_upload_bytes`]를 초과하면
/// `ValidationError`로 거부합니다. `text_field` 이름의 텍스트 필드가
/// 함께 전달되면 UTF-8 문자열로 수집하여 돌려줍니다.
pub async fn read_upload(
    payload: &mut Multipart,
    file_field: &str,
    allowed_types: &[&str],
    text_field: Option<&str>,
) -> AppResult<(UploadedFile, Option<String>)> {
    let max_bytes = UploadConfig::max_upload_bytes();

    let mut file: Option<UploadedFile> = None;
    let mut text: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            log::warn!("Multipart 필드 처리 실패: {}", e);
            AppError::ValidationError("업로드 본문을 처리할 수 없습니다".to_string())
        })?;

        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .unwrap_or("")
            .to_string();

        if field_name == file_field {
            let content_type = field
                .content_type()
                .map(|ct| ct.essence_str().to_string())
                .ok_or_else(|| {
                    AppError::ValidationError("파일의 Content-Type이 필요합니다".to_string())
                })?;

            if !allowed_types.contains(&content_type.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "지원하지 않는 파일 형식입니다: {} (허용: {})",
                    content_type,
                    allowed_types.join(", ")
                )));
            }

            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or("attachment")
                .to_string();

            let bytes = collect_field_bytes(&mut field, max_bytes).await?;

            file = Some(UploadedFile {
                filename,
                content_type,
                bytes,
            });
        } else if text_field.is_some_and(|name| name == field_name) {
            let bytes = collect_field_bytes(&mut field, max_bytes).await?;
            let value = String::from_utf8(bytes).map_err(|_| {
                AppError::ValidationError(format!(
                    "{} 필드는 UTF-8 텍스트여야 합니다",
                    field_name
                ))
            })?;
            text = Some(value);
        }
        // 알 수 없는 필드는 무시하고 스트림만 소비
    }

    let file = file.ok_or_else(|| {
        AppError::ValidationError(format!("{} 파일 필드가 없습니다", file_field))
    })?;

    Ok((file, text))
}

/// 필드 청크를 크기 상한까지 수집합니다.
async fn collect_field_bytes(
    field: &mut actix_multipart::Field,
    max_bytes: usize,
) -> AppResult<Vec<u8>> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(|e| {
            log::warn!("업로드 청크 읽기 실패: {}", e);
            AppError::ValidationError("파일 내용을 읽을 수 없습니다".to_string())
        })?;

        if bytes.len() + data.len() > max_bytes {
            return Err(AppError::ValidationError(format!(
                "파일 크기가 허용 한도를 초과했습니다 (최대 {} bytes)",
                max_bytes
            )));
        }

        bytes.extend_from_slice(&data);
    }

    Ok(bytes)
}
