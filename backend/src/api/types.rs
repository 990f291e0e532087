//! REST API types for the upload widget.
//!
//! The widget only looks at `message` (success) and `error` (failure).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Body of a successful upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

impl UploadResponse {
    pub fn stored(filename: &str) -> Self {
        Self {
            message: format!("{} uploaded successfully!", filename),
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({ "error": error })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_message() {
        let response = UploadResponse::stored("monster.png");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, json!({ "message": "monster.png uploaded successfully!" }));
    }

    #[test]
    fn test_error_response_shape() {
        assert_eq!(error_response("No file provided"), json!({ "error": "No file provided" }));
    }
}
