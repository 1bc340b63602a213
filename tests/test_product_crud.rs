//! End-to-end HTTP contract test for the `/produto` routes.
//!
//! Serves the router in-process on an ephemeral port and drives it with `reqwest`.

use estoque::{transport, ProductRepository};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_server() -> Result<String, Box<dyn std::error::Error>> {
    let app_state = transport::http::AppState::new(Arc::new(ProductRepository::new()));
    let router = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

#[tokio::test]
async fn test_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    // --- CREATE ---
    let resp = client
        .post(format!("{}/produto", base_url))
        .json(&json!({"nome": "Caneta", "descricao": "Azul"}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = resp.json().await?;
    let id = created["id"].as_str().expect("id is a string").to_string();
    assert!(!id.is_empty());
    assert_eq!(created, json!({"id": id, "nome": "Caneta", "descricao": "Azul"}));

    // --- LIST ---
    let listed: Value = client
        .get(format!("{}/produto", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, json!([{"id": id, "nome": "Caneta", "descricao": "Azul"}]));

    // --- UPDATE ---
    let resp = client
        .put(format!("{}/produto/{}", base_url, id))
        .json(&json!({"nome": "Lápis", "descricao": "Preto"}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await?;
    assert_eq!(updated, json!({"id": id, "nome": "Lápis", "descricao": "Preto"}));

    // --- DELETE ---
    let resp = client
        .delete(format!("{}/produto/{}", base_url, id))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.text().await?, "Produto removido com sucesso");

    let listed: Value = client
        .get(format!("{}/produto", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, json!([]));

    // Deleting again is a not-found.
    let resp = client
        .delete(format!("{}/produto/{}", base_url, id))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_create_with_missing_fields_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    for body in [
        json!({}),
        json!({"nome": "Caneta"}),
        json!({"descricao": "Azul"}),
        json!({"nome": "", "descricao": "Azul"}),
        json!({"nome": 5, "descricao": "Azul"}),
    ] {
        let resp = client
            .post(format!("{}/produto", base_url))
            .json(&body)
            .send()
            .await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let err: Value = resp.json().await?;
        assert_eq!(err, json!({"error": "Campos Inválidos"}));
    }

    // Not JSON at all.
    let resp = client
        .post(format!("{}/produto", base_url))
        .header("content-type", "application/json")
        .body("nome=Caneta")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let listed: Value = client
        .get(format!("{}/produto", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, json!([]));

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_unknown_id() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let existing: Value = client
        .post(format!("{}/produto", base_url))
        .json(&json!({"nome": "Caneta", "descricao": "Azul"}))
        .send()
        .await?
        .json()
        .await?;

    let resp = client
        .put(format!("{}/produto/nonexistent", base_url))
        .json(&json!({"nome": "Lápis", "descricao": "Preto"}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: Value = resp.json().await?;
    assert_eq!(err, json!({"error": "Produto não encontrado"}));

    // Invalid fields win over an unknown id.
    let resp = client
        .put(format!("{}/produto/nonexistent", base_url))
        .json(&json!({"nome": "Lápis"}))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client
        .delete(format!("{}/produto/nonexistent", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: Value = resp.json().await?;
    assert_eq!(err, json!({"error": "Produto não encontrado"}));

    // Nothing was applied after the not-found responses.
    let listed: Value = client
        .get(format!("{}/produto", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed, json!([existing]));

    Ok(())
}

#[tokio::test]
async fn test_update_keeps_position() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for (nome, descricao) in [("A", "a"), ("B", "b"), ("C", "c")] {
        let created: Value = client
            .post(format!("{}/produto", base_url))
            .json(&json!({"nome": nome, "descricao": descricao}))
            .send()
            .await?
            .json()
            .await?;
        ids.push(created["id"].as_str().unwrap_or_default().to_string());
    }

    client
        .put(format!("{}/produto/{}", base_url, ids[1]))
        .json(&json!({"nome": "B2", "descricao": "b2"}))
        .send()
        .await?
        .error_for_status()?;

    let listed: Value = client
        .get(format!("{}/produto", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(
        listed,
        json!([
            {"id": ids[0], "nome": "A", "descricao": "a"},
            {"id": ids[1], "nome": "B2", "descricao": "b2"},
            {"id": ids[2], "nome": "C", "descricao": "c"}
        ])
    );

    Ok(())
}

#[tokio::test]
async fn test_cors_and_health() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/produto", base_url))
        .header("origin", "http://localhost:3000")
        .send()
        .await?;
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let health: Value = client
        .get(format!("{}/health", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health, json!({"status": "ok", "products": 0}));

    Ok(())
}
