use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::key_value::service::KeyValueService;
use service::storage::memory_kv_store::MemoryKeyValueRepository;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

/// Spawn the real router on an ephemeral port, backed by the in-memory
/// repository so the suite needs no database.
async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState {
        kv: Arc::new(KeyValueService::new(MemoryKeyValueRepository::new())),
    };

    let app: Router = routes::build_router(cors(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_key_value_scenario() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Create a=1
    let res = c
        .post(format!("{}/api/keys", app.base_url))
        .json(&json!({"key": "a", "value": "1"}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["message"], "Key-Value added successfully.");
    assert_eq!(body["data"]["key"], "a");
    assert_eq!(body["data"]["value"], "1");

    // Create a=2 -> conflict, stored value untouched
    let res = c
        .post(format!("{}/api/keys", app.base_url))
        .json(&json!({"key": "a", "value": "2"}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::CONFLICT);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status_code"], 409);
    assert_eq!(body["message"], "Key already exists.");
    assert!(body["data"].is_null());

    let res = c.get(format!("{}/api/keys/a", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Key-Value retrieved successfully.");
    assert_eq!(body["data"]["value"], "1");

    // Update a -> 2 via body payload
    let res = c
        .patch(format!("{}/api/keys/a", app.base_url))
        .json(&json!({"value": "2"}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Value updated successfully.");
    assert_eq!(body["data"]["value"], "2");

    let res = c.get(format!("{}/api/keys/a", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["value"], "2");

    // Unknown key -> 404 envelope
    let res = c.get(format!("{}/api/keys/b", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status_code"], 404);
    assert_eq!(body["message"], "Key does not exist.");
    assert!(body["data"].is_null());

    Ok(())
}

#[tokio::test]
async fn e2e_update_missing_key_is_404_and_never_upserts() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .patch(format!("{}/api/keys/ghost", app.base_url))
        .json(&json!({"value": "x"}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);

    // The failed update must not have created the record
    let res = c.get(format!("{}/api/keys/ghost", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_creates_single_winner() -> anyhow::Result<()> {
    let app = start_server().await?;

    let mut handles = Vec::new();
    for i in 0..8 {
        let url = format!("{}/api/keys", app.base_url);
        handles.push(tokio::spawn(async move {
            let res = reqwest::Client::new()
                .post(url)
                .json(&json!({"key": "contested", "value": format!("payload-{}", i)}))
                .send()
                .await?;
            let status = res.status();
            let body = res.json::<serde_json::Value>().await?;
            Ok::<_, anyhow::Error>((status, body))
        }));
    }

    let mut winner_value = None;
    let mut conflicts = 0;
    for h in handles {
        let (status, body) = h.await??;
        match status {
            reqwest::StatusCode::OK => {
                assert!(winner_value.is_none(), "more than one create succeeded");
                winner_value = Some(body["data"]["value"].as_str().unwrap().to_string());
            }
            reqwest::StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {}", other),
        }
    }
    assert_eq!(conflicts, 7);
    let winner_value = winner_value.expect("exactly one create should win");

    let res = client()
        .get(format!("{}/api/keys/contested", app.base_url))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["value"], winner_value.as_str());
    Ok(())
}
