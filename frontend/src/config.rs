//! Application configuration.
//!
//! Centralized configuration for the Monster Upload widget.
//! Everything is compiled in; the backend address matches the
//! default `monster-backend serve` listener.

/// Upload endpoint.
///
/// Receives a `multipart/form-data` POST with a single `file` part.
pub const UPLOAD_URL: &str = "http://127.0.0.1:5000/upload";

/// Application name, used for the page title.
pub const APP_NAME: &str = "Monster Upload";

/// Minimum time the eating animation stays on screen (ms).
pub const CHEW_DELAY_MS: u32 = 2000;

/// How long a toast stays fully visible (ms).
pub const TOAST_VISIBLE_MS: u32 = 2500;

/// Fade-out allowance before the toast leaves the accessibility tree (ms).
pub const TOAST_FADE_MS: u32 = 500;

/// Toast text when the request never completed.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: could not reach the upload server";

/// Fallback when the server rejected the file without saying why.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Fallback when the server accepted the file without a message.
pub const UPLOAD_COMPLETE: &str = "Upload complete";
