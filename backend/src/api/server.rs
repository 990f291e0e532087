//! HTTP Server for the monster upload widget.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                     |
//! |--------|-------------|---------------------------------|
//! | GET    | `/`         | Liveness text                   |
//! | GET    | `/health`   | Health check                    |
//! | POST   | `/upload`   | Store one file (`file` part)    |
//! | GET    | `/uploads`  | List stored uploads             |
//! | GET    | `/api/logs` | SSE stream of upload activity   |

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::{Json, Sse, sse::Event},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::BroadcastStream;
use tower_http::cors::CorsLayer;

use super::logs::{log_error, log_info, log_success, log_warning, LOG_BROADCASTER};
use super::types::{error_response, UploadResponse};
use crate::config::ServerConfig;
use crate::error::{ServerResult, StoreError};
use crate::store::{UploadRecord, UploadStore};

type ApiError = (StatusCode, Json<Value>);

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<UploadStore>>,
}

impl AppState {
    pub fn new(store: UploadStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Build the application router.
///
/// Bodies over `max_upload_bytes` are refused with 413.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    // The widget is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/upload", post(upload_file))
        .route("/uploads", get(list_uploads))
        .route("/api/logs", get(sse_logs))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let store = UploadStore::open(&config.upload_dir, &config.index_file)?;
    let known = store.list().len();
    let app = router(AppState::new(store), config.max_upload_bytes);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("👾 Monster upload server running on http://{}", addr);
    println!("   POST /upload    - Upload a file (multipart, field \"file\")");
    println!("   GET  /uploads   - List stored uploads");
    println!("   GET  /api/logs  - SSE activity stream");
    println!("   GET  /health    - Health check");
    println!();
    println!("📁 Storing files in {} ({} uploads on record)", config.upload_dir.display(), known);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn home() -> &'static str {
    "Monster app running!"
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "monster-backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    // Lagged receivers skip what they missed
    let stream = BroadcastStream::new(rx).filter_map(|result| {
        let entry = result.ok()?;
        let json = serde_json::to_string(&entry).ok()?;
        Some(Ok(Event::default().data(json)))
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Upload endpoint
async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        log_warning(format!("Rejected upload: {}", e.body_text()));
        (e.status(), Json(error_response(&format!("Multipart error: {}", e.body_text()))))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(|s| s.to_string());
        let bytes = field.bytes().await.map_err(|e| {
            log_warning(format!("Rejected upload: {}", e.body_text()));
            (e.status(), Json(error_response(&format!("Read error: {}", e.body_text()))))
        })?;
        upload = Some((file_name, bytes.to_vec()));
    }

    let (file_name, bytes) = upload.ok_or_else(|| bad_request("No file provided"))?;
    let file_name = file_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| bad_request("No file selected"))?;

    log_info(format!("📄 Incoming: {} ({} bytes)", file_name, bytes.len()));

    // Disk writes run on the blocking pool, not on the async workers.
    let store = Arc::clone(&state.store);
    let record = tokio::task::spawn_blocking(move || -> Result<UploadRecord, ApiError> {
        let mut store = store
            .lock()
            .map_err(|_| internal_error("Upload store is unavailable"))?;
        store.save(&file_name, &bytes).map_err(|e| match e {
            StoreError::InvalidFilename(_) => bad_request(&e.to_string()),
            _ => internal_error(&e.to_string()),
        })
    })
    .await
    .map_err(|e| internal_error(&format!("Upload task failed: {}", e)))??;

    log_success(format!("{} stored as upload #{}", record.filename, record.id));

    Ok(Json(UploadResponse::stored(&record.filename)))
}

/// List stored uploads, oldest first
async fn list_uploads(State(state): State<AppState>) -> Result<Json<Vec<UploadRecord>>, ApiError> {
    let store = state
        .store
        .lock()
        .map_err(|_| internal_error("Upload store is unavailable"))?;
    Ok(Json(store.list().to_vec()))
}

fn bad_request(message: &str) -> ApiError {
    log_warning(format!("Rejected upload: {}", message));
    (StatusCode::BAD_REQUEST, Json(error_response(message)))
}

fn internal_error(message: &str) -> ApiError {
    log_error(format!("Upload failed: {}", message));
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response(message)))
}
