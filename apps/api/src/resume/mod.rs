//! Resume upload: pulls plain text out of a PDF so it can be pasted into any
//! of the analysis or interview requests.

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tokio::task::JoinError;
use tracing::{info, warn};

use crate::errors::AppError;

/// Upload cap for resume PDFs.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub characters: usize,
}

/// POST /api/v1/resume/extract (multipart, field `file`)
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some(FILE_FIELD) {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some(data);
            break;
        }
    }

    let data = upload
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::Validation("PDFファイルを選択してください".to_string()))?;

    let size = data.len();
    let raw = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(extraction_task_error)?
        .map_err(|e| {
            warn!("PDF extraction failed: {e}");
            unreadable_pdf()
        })?;

    let text = normalize_extracted_text(&raw);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDFにテキストが含まれていません".to_string(),
        ));
    }

    let characters = text.chars().count();
    info!("Extracted {characters} characters from {size}-byte PDF");
    Ok(Json(ExtractResponse { text, characters }))
}

fn unreadable_pdf() -> AppError {
    AppError::UnprocessableEntity("PDFからテキストを抽出できませんでした".to_string())
}

/// pdf-extract panics on some malformed files; that is a bad upload, not a
/// server fault.
fn extraction_task_error(e: JoinError) -> AppError {
    if e.is_panic() {
        warn!("PDF extraction panicked: {e}");
        unreadable_pdf()
    } else {
        AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
    }
}

/// Trims every line and collapses runs of blank lines into one.
pub fn normalize_extracted_text(raw: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in raw.lines().map(str::trim) {
        if line.is_empty() && out.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
