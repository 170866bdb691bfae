use std::path::Path;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tokio::fs;
use tracing::{info, warn};

use crate::extract;
use crate::models::{AppState, UploadResponse};
use crate::store::DocumentRecord;
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    // Let our own size check answer with 413 instead of axum's default
    // 2 MB body cap; multipart framing needs a little headroom.
    let body_limit = state.config.upload.max_bytes + 64 * 1024;
    Router::new()
        .route("/upload", post(upload_pdf))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Handle PDF upload and extraction.
///
/// Accepts multipart/form-data with a `file` field. The raw bytes are
/// saved under the upload directory keyed by the client-supplied filename
/// (a re-upload with the same name silently overwrites), the text is
/// extracted and stored in memory, and a truncated preview is returned.
async fn upload_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    // Non-multipart requests get the same {"error": ...} shape as our own 400s.
    let mut multipart = multipart.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::InvalidRequest("No selected file".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Failed to read file: {e}")))?;

        file = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = file.ok_or_else(|| AppError::InvalidRequest("No file part".to_string()))?;

    if bytes.len() > state.config.upload.max_bytes {
        return Err(AppError::PayloadTooLarge(state.config.upload.max_bytes));
    }

    // Keep only the final path component of the client-supplied name.
    let filename = Path::new(&filename)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::InvalidRequest("No selected file".to_string()))?;

    let local_path = Path::new(&state.config.upload.dir).join(&filename);
    fs::write(&local_path, &bytes).await?;

    let text = extract::extract_text(&bytes).map_err(|e| {
        warn!(%filename, "extraction failed: {e}");
        AppError::Extraction(e.to_string())
    })?;

    info!(%filename, chars = text.len(), "PDF uploaded and text extracted");

    let preview = extract::preview(&text, state.config.upload.preview_chars).to_string();

    state
        .documents
        .insert(DocumentRecord {
            filename,
            local_path: local_path.to_string_lossy().to_string(),
            size: bytes.len(),
            text,
        })
        .await;

    Ok(Json(UploadResponse {
        message: "PDF uploaded and text extracted".to_string(),
        text: preview,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    use crate::routes::test_support::{multipart_request, test_state};

    #[tokio::test]
    async fn upload_without_file_field_is_400() {
        let (state, _dir) = test_state();
        let app = super::router(state);

        let request = multipart_request("/upload", "other", "notes.txt", b"hello");
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "No file part");
    }

    #[tokio::test]
    async fn upload_with_empty_filename_is_400() {
        let (state, _dir) = test_state();
        let app = super::router(state);

        let request = multipart_request("/upload", "file", "", b"%PDF-1.4");
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "No selected file");
    }

    #[tokio::test]
    async fn upload_of_unparseable_bytes_is_500() {
        let (state, _dir) = test_state();
        let app = super::router(state);

        let request = multipart_request("/upload", "file", "broken.pdf", b"not a pdf at all");
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("Error extracting text"));
    }

    #[tokio::test]
    async fn oversized_upload_is_413() {
        let (state, _dir) = test_state();
        let max = state.config.upload.max_bytes;
        let app = super::router(state);

        let big = vec![0u8; max + 1];
        let request = multipart_request("/upload", "file", "big.pdf", &big);
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn non_multipart_request_keeps_error_shape() {
        let (state, _dir) = test_state();
        let app = super::router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"file": "nope"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn empty_body_is_400() {
        let (state, _dir) = test_state();
        let app = super::router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "content-type",
                "multipart/form-data; boundary=XUPLOADBOUNDARY",
            )
            .body(Body::from("--XUPLOADBOUNDARY--\r\n"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
