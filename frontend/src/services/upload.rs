//! HTTP service for uploading a file to the backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, UploadResult};

/// Upload a single file as the `file` part of a multipart POST.
///
/// Any HTTP response, whatever its status, is an `Ok`; the status and the
/// JSON body are folded into an [`UploadResult`]. Only a request that
/// never completed is an `Err`.
pub async fn upload_file(file: File, upload_url: &str) -> AppResult<UploadResult> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| AppError::Request(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(upload_url)
        .body(form_data)
        .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    // An unreadable body is treated like an empty one.
    let body = response.text().await.unwrap_or_default();

    Ok(UploadResult::from_response(response.ok(), &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let result = UploadResult::from_response(true, r#"{"message":"cat.png uploaded successfully!"}"#);
        assert!(result.is_success());
        assert_eq!(result.message.as_deref(), Some("cat.png uploaded successfully!"));
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_error_body_with_extra_fields() {
        let result = UploadResult::from_response(
            false,
            r#"{"error":"No file provided","status":"error"}"#,
        );
        assert!(!result.is_success());
        assert_eq!(result.error.as_deref(), Some("No file provided"));
    }
}
