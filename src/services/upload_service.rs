use std::path::{Path, PathBuf};

use axum::extract::multipart::Multipart;
use uuid::Uuid;

use crate::errors::AppError;

pub const MAX_PROOF_BYTES: usize = 5 * 1024 * 1024;
// Transport limit for the proof route: the full 5 MB payload plus headroom
// for multipart boundaries and headers. Axum's default body cap is 2 MB,
// which would reject valid proofs before the size check here ever ran.
pub const PROOF_BODY_LIMIT: usize = MAX_PROOF_BYTES + 64 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "pdf"];

/// Reads the `file` field of a multipart payment-proof upload and stores it
/// under `upload_dir` as `<uuid>.<ext>`. Returns the stored file name.
pub async fn save_payment_proof(
    upload_dir: &Path,
    mut multipart: Multipart,
) -> Result<String, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let extension = field
            .file_name()
            .and_then(|name| name.rsplit('.').next())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| AppError::Upload("Uploaded file has no extension".into()))?;
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::Upload(format!(
                "Unsupported file type .{extension}; allowed: png, jpg, jpeg, pdf"
            )));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(format!("Failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Upload("Uploaded file is empty".into()));
        }
        if bytes.len() > MAX_PROOF_BYTES {
            return Err(AppError::Upload("Uploaded file exceeds 5 MB".into()));
        }

        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let destination: PathBuf = upload_dir.join(&file_name);
        tokio::fs::create_dir_all(upload_dir)
            .await
            .map_err(|e| AppError::Upload(format!("Failed to prepare upload dir: {e}")))?;
        tokio::fs::write(&destination, &bytes)
            .await
            .map_err(|e| AppError::Upload(format!("Failed to store upload: {e}")))?;

        return Ok(file_name);
    }

    Err(AppError::Upload("Missing 'file' field in upload".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::{DefaultBodyLimit, State};
    use axum::routing::post;
    use axum::Router;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::errors::AppError;

    async fn store(
        State(dir): State<PathBuf>,
        multipart: Multipart,
    ) -> Result<String, AppError> {
        save_payment_proof(&dir, multipart).await
    }

    // Same shape as the payments router: the proof body limit layered over
    // the multipart handler.
    fn proof_app(dir: PathBuf) -> Router {
        Router::new()
            .route("/", post(store))
            .layer(DefaultBodyLimit::max(PROOF_BODY_LIMIT))
            .with_state(dir)
    }

    fn proof_request(payload_len: usize) -> Request<Body> {
        let boundary = "proof-test-boundary";
        let mut body = Vec::with_capacity(payload_len + 512);
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"file\"; filename=\"proof.png\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
        body.extend_from_slice(&vec![0u8; payload_len]);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri("/")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("autovest-proofs-{tag}-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn three_megabyte_proof_is_accepted() {
        let app = proof_app(scratch_dir("mid"));
        let response = app
            .oneshot(proof_request(3 * 1024 * 1024))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn small_proof_is_accepted() {
        let app = proof_app(scratch_dir("small"));
        let response = app.oneshot(proof_request(64 * 1024)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn six_megabyte_proof_is_rejected_by_the_transport_limit() {
        let app = proof_app(scratch_dir("big"));
        let response = app
            .oneshot(proof_request(6 * 1024 * 1024))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn just_over_five_megabytes_fails_the_size_check() {
        // Inside the transport limit but over MAX_PROOF_BYTES: the
        // service's own check fires, not the body-limit layer.
        let app = proof_app(scratch_dir("edge"));
        let response = app
            .oneshot(proof_request(MAX_PROOF_BYTES + 1))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn disallowed_extension_is_rejected() {
        let app = proof_app(scratch_dir("ext"));
        let boundary = "proof-test-boundary";
        let disposition = "Content-Disposition: form-data; name=\"file\"; filename=\"proof.exe\"";
        let body = format!("--{boundary}\r\n{disposition}\r\n\r\npayload\r\n--{boundary}--\r\n");
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
