//! End-to-end tests for the `/doacoes` resource.

mod common;

use axum::http::{Method, StatusCode};
use common::{delete, get, json_request, multipart_request, send, spawn_app};
use serde_json::json;

#[tokio::test]
async fn create_without_file_leaves_img_null_and_preserves_preco() {
    let app = spawn_app().await;

    let request = multipart_request(
        "/doacoes",
        &[
            ("nome", "Fancy Feast"),
            ("preco", "R$ 35.00"),
            ("descricao", "Ração de gato"),
        ],
        None,
    );
    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_number());
    assert_eq!(body["nome"], "Fancy Feast");
    assert_eq!(body["preco"], "R$ 35.00");
    assert_eq!(body["descricao"], "Ração de gato");
    assert!(body["img"].is_null());
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn create_without_nome_surfaces_the_storage_fault() {
    let app = spawn_app().await;

    let request = multipart_request("/doacoes", &[("descricao", "sem nome")], None);
    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Erro ao criar doação");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_replaces_every_field_and_round_trips() {
    let app = spawn_app().await;

    let (_, created) = send(
        &app.router,
        multipart_request("/doacoes", &[("nome", "Whiskas"), ("preco", "R$ 20.00")], None),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let replacement = json!({
        "nome": "Whiskas Filhotes",
        "descricao": "Ração úmida",
        "preco": "R$ 22.50",
        "img": "/uploads/ja-existente.png"
    });
    let (status, updated) = send(
        &app.router,
        json_request(Method::PUT, &format!("/doacoes/{id}"), replacement.clone()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nome"], replacement["nome"]);
    assert_eq!(updated["descricao"], replacement["descricao"]);
    assert_eq!(updated["preco"], replacement["preco"]);
    assert_eq!(updated["img"], replacement["img"]);
    assert_ne!(updated["updatedAt"], updated["createdAt"]);

    // What you PUT is what a subsequent GET returns.
    let (_, all) = send(&app.router, get("/doacoes")).await;
    assert_eq!(all[0]["nome"], replacement["nome"]);
    assert_eq!(all[0]["img"], replacement["img"]);
}

#[tokio::test]
async fn update_of_unknown_id_is_404_with_the_expected_message() {
    let app = spawn_app().await;

    let body = json!({ "nome": "x", "descricao": "y", "preco": "z", "img": null });
    let (status, json) = send(
        &app.router,
        json_request(Method::PUT, "/doacoes/999", body),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "message": "Doação não encontrada" }));
}

#[tokio::test]
async fn delete_reports_success_once_and_404_afterwards() {
    let app = spawn_app().await;

    let (_, created) = send(
        &app.router,
        multipart_request("/doacoes", &[("nome", "Cesar")], None),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app.router, delete(&format!("/doacoes/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Doação removida com sucesso!");

    let (status, body) = send(&app.router, delete(&format!("/doacoes/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Doação não encontrada");
}

#[tokio::test]
async fn list_returns_exactly_the_surviving_records() {
    let app = spawn_app().await;

    let (_, empty) = send(&app.router, get("/doacoes")).await;
    assert_eq!(empty, json!([]));

    let mut ids = Vec::new();
    for nome in ["a", "b", "c", "d", "e"] {
        let (_, created) = send(
            &app.router,
            multipart_request("/doacoes", &[("nome", nome)], None),
        )
        .await;
        ids.push(created["id"].as_i64().unwrap());
    }
    for id in &ids[..2] {
        send(&app.router, delete(&format!("/doacoes/{id}"))).await;
    }

    let (status, all) = send(&app.router, get("/doacoes")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids[2..].to_vec());
}

#[tokio::test]
async fn created_ids_are_unique_and_increasing() {
    let app = spawn_app().await;

    let mut previous = 0;
    for _ in 0..3 {
        let (_, created) = send(
            &app.router,
            multipart_request("/doacoes", &[("nome", "item")], None),
        )
        .await;
        let id = created["id"].as_i64().unwrap();
        assert!(id > previous);
        previous = id;
    }
}
