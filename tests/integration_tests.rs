// Integration tests: HTTP endpoints over a temporary SQLite store

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::sample;
use factory_dashboard::config::AppConfig;
use factory_dashboard::routes;
use factory_dashboard::telemetry_repo::TelemetryRepo;
use std::sync::Arc;
use tempfile::TempDir;

const TEST_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[database]
path = "data/test.db"
max_pool_size = 2

[dashboard]
page_reload_secs = 5
client_poll_secs = 30
"#;

fn test_app_config() -> AppConfig {
    AppConfig::load_from_str(TEST_CONFIG).unwrap()
}

async fn test_server(repo: TelemetryRepo) -> TestServer {
    let app = routes::app(Arc::new(repo), test_app_config());
    TestServer::new(app).unwrap()
}

async fn seeded_repo() -> (TempDir, TelemetryRepo) {
    let (dir, repo) = common::temp_repo().await;
    repo.create_table().await.unwrap();
    repo.insert_samples(&[
        sample("M1", 1, "STOP", 50, "E01"),
        sample("M1", 2, "RUN", 100, ""),
        sample("M1", 3, "RUN", 100, ""),
        sample("M2", 1, "IDLE", 0, ""),
    ])
    .await
    .unwrap();
    (dir, repo)
}

#[tokio::test]
async fn test_version_endpoint() {
    let (_dir, repo) = common::temp_repo().await;
    let server = test_server(repo).await;
    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(
        json.get("name").and_then(|v| v.as_str()),
        Some("factory-dashboard")
    );
    assert!(json.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_data_endpoint_returns_chronological_histories() {
    let (_dir, repo) = seeded_repo().await;
    let server = test_server(repo).await;
    let response = server.get(routes::DATA_PATH).await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();

    let machines = json.as_object().unwrap();
    assert_eq!(machines.len(), 2);
    let m1 = &json["M1"];
    assert_eq!(m1["last_data"]["status"], "RUN");
    assert_eq!(m1["last_data"]["producao_total"], 100);
    let status: Vec<&str> = m1["status"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["status"].as_str().unwrap())
        .collect();
    assert_eq!(status, vec!["STOP", "RUN"]);
    let production: Vec<i64> = m1["producao"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["producao_total"].as_i64().unwrap())
        .collect();
    assert_eq!(production, vec![50, 100]);
    assert_eq!(m1["alarmes"][0]["alarmes_ativos"], "E01");

    assert!(json["M2"]["producao"].as_array().unwrap().is_empty());
    assert!(json["M2"]["alarmes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_data_endpoint_empty_table_is_empty_object() {
    let (_dir, repo) = common::temp_repo().await;
    repo.create_table().await.unwrap();
    let server = test_server(repo).await;
    let response = server.get(routes::DATA_PATH).await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json, serde_json::json!({}));
}

#[tokio::test]
async fn test_data_endpoint_missing_table_is_uninitialized_marker() {
    let (_dir, repo) = common::temp_repo().await;
    let server = test_server(repo).await;
    let response = server.get(routes::DATA_PATH).await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json, serde_json::json!({ "erro": "Tabela nao encontrada." }));
}

/// Repo whose pool is already closed: every acquire fails.
async fn closed_repo() -> (TempDir, TelemetryRepo) {
    let (dir, repo) = common::temp_repo().await;
    repo.create_table().await.unwrap();
    repo.close().await;
    (dir, repo)
}

#[tokio::test]
async fn test_data_endpoint_store_failure_is_error_response() {
    let (_dir, repo) = closed_repo().await;
    let server = test_server(repo).await;

    let response = server.get(routes::DATA_PATH).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = response.json();
    let message = json["erro"].as_str().unwrap();
    assert!(message.starts_with("Erro ao buscar dados: "), "{message}");
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dashboard_page_store_failure_shows_error() {
    let (_dir, repo) = closed_repo().await;
    let server = test_server(repo).await;

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = response.text();
    assert!(html.contains("Erro ao buscar dados"));
    assert!(html.contains(r#"<meta http-equiv="refresh" content="5">"#));
}

#[tokio::test]
async fn test_dashboard_page_renders_cards() {
    let (_dir, repo) = seeded_repo().await;
    let server = test_server(repo).await;
    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<meta http-equiv="refresh" content="5">"#));
    assert!(html.contains(">M1</h2>"));
    assert!(html.contains(">M2</h2>"));
    assert!(!html.contains("Aguardando dados"));
}

#[tokio::test]
async fn test_dashboard_page_waits_for_missing_table() {
    let (_dir, repo) = common::temp_repo().await;
    let server = test_server(repo).await;
    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Aguardando dados do banco de dados..."));
}

#[tokio::test]
async fn test_live_page_points_script_at_data_endpoint() {
    let (_dir, repo) = common::temp_repo().await;
    let server = test_server(repo).await;
    let response = server.get("/live").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-source="/api/dashboard""#));
    assert!(html.contains(r#"data-poll-secs="30""#));
    assert!(html.contains("/assets/dashboard.js"));
}

#[tokio::test]
async fn test_static_assets_served_with_content_type() {
    let (_dir, repo) = common::temp_repo().await;
    let server = test_server(repo).await;

    let css = server.get("/assets/style.css").await;
    css.assert_status_ok();
    assert!(
        css.header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );
    assert!(css.text().contains(".maquina-card"));

    let js = server.get("/assets/dashboard.js").await;
    js.assert_status_ok();
    assert!(
        js.header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/javascript")
    );
    assert!(js.text().contains("AbortController"));
}
