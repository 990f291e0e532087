//! # Monster Upload backend
//!
//! The endpoint the monster upload widget feeds its files to.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────────┐
//! │   Widget    │────▶│  POST       │────▶│  UploadStore         │
//! │ (multipart) │     │  /upload    │     │  uploads/ + index    │
//! └─────────────┘     └─────────────┘     └──────────────────────┘
//!                            │
//!                            ▼
//!                     /api/logs (SSE)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use monster_backend::{start_server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     start_server(ServerConfig::default()).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Server configuration
//! - [`store`] - Upload files and records
//! - [`api`] - HTTP API server

pub mod error;
pub mod config;
pub mod store;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, ServerError, StoreResult, ServerResult};

pub use config::ServerConfig;

pub use store::{sanitize_filename, UploadRecord, UploadStore};

pub use api::{
    router,
    start_server,
    AppState,
    UploadResponse,
    error_response,
    LogEntry,
    LogLevel,
};
