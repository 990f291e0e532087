//! End-to-end tests against the real router on an ephemeral port.

use monster_backend::{router, AppState, UploadRecord, UploadStore};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;

const LIMIT: usize = 64 * 1024;

async fn spawn_server(dir: &TempDir) -> String {
    let store = UploadStore::open(dir.path().join("uploads"), dir.path().join("uploads.json")).unwrap();
    let app = router(AppState::new(store), LIMIT);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn file_form(name: &str, bytes: &[u8]) -> Form {
    Form::new().part("file", Part::bytes(bytes.to_vec()).file_name(name.to_string()))
}

#[tokio::test]
async fn test_upload_stores_file_and_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/upload", base))
        .multipart(file_form("snack.txt", b"crunchy"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "snack.txt uploaded successfully!" }));

    let stored = std::fs::read(dir.path().join("uploads/snack.txt")).unwrap();
    assert_eq!(stored, b"crunchy");

    let records: Vec<UploadRecord> = client
        .get(format!("{}/uploads", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].filename, "snack.txt");
}

#[tokio::test]
async fn test_missing_file_part() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir).await;

    let form = Form::new().text("note", "no file here");
    let response = reqwest::Client::new()
        .post(format!("{}/upload", base))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_file_part_without_filename() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir).await;

    let form = Form::new().part("file", Part::text("bare field"));
    let response = reqwest::Client::new()
        .post(format!("{}/upload", base))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No file selected");
}

#[tokio::test]
async fn test_path_components_are_stripped() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir).await;

    let response = reqwest::Client::new()
        .post(format!("{}/upload", base))
        .multipart(file_form("../../escape.txt", b"nope"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(dir.path().join("uploads/escape.txt").exists());
    assert!(!dir.path().join("escape.txt").exists());
}

#[tokio::test]
async fn test_oversized_upload_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir).await;

    let response = reqwest::Client::new()
        .post(format!("{}/upload", base))
        .multipart(file_form("huge.bin", &vec![0u8; LIMIT + 1024]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(!dir.path().join("uploads/huge.bin").exists());
}

#[tokio::test]
async fn test_home_and_health() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let home = client.get(&base).send().await.unwrap().text().await.unwrap();
    assert_eq!(home, "Monster app running!");

    let health: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn test_cors_preflight_allows_widget_origin() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/upload", base))
        .header("Origin", "http://127.0.0.1:8080")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_concurrent_uploads_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let uploads = (0..8).map(|i| {
        client
            .post(format!("{}/upload", base))
            .multipart(file_form(&format!("bite-{}.txt", i), b"nom"))
            .send()
    });
    for response in futures::future::join_all(uploads).await {
        assert_eq!(response.unwrap().status(), StatusCode::OK);
    }

    let records: Vec<UploadRecord> = client
        .get(format!("{}/uploads", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let mut ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<u64>>());

    for i in 0..8 {
        assert!(dir.path().join(format!("uploads/bite-{}.txt", i)).exists());
    }
}
