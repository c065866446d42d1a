#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use layerbook_generator::config::GeneratorConfig;

/// Spawn `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{addr}")
}

/// Armor database stub answering `/armor/sets` with `body`.
pub async fn armor_db(body: Value) -> String {
    let router = Router::new().route(
        "/armor/sets",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    format!("{}/armor/sets", serve(router).await)
}

/// Armor database stub answering `/armor/sets` with `status` and a text body.
pub async fn armor_db_status(status: StatusCode) -> String {
    let router = Router::new().route(
        "/armor/sets",
        get(move || async move { (status, "unavailable") }),
    );
    format!("{}/armor/sets", serve(router).await)
}

/// Armor database stub returning a body that is not JSON.
pub async fn armor_db_malformed() -> String {
    let router = Router::new().route("/armor/sets", get(|| async { "<html>oops</html>" }));
    format!("{}/armor/sets", serve(router).await)
}

/// Armor database stub that never answers within any reasonable timeout.
pub async fn armor_db_hung() -> String {
    let router = Router::new().route(
        "/armor/sets",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            "[]"
        }),
    );
    format!("{}/armor/sets", serve(router).await)
}

/// A URL on a local port nothing is listening on.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/armor/sets")
}

/// `per_category` pieces of rarity 6 for every category, ids `{kind}-{n}`.
pub fn full_armor_sets(per_category: usize) -> Value {
    let kinds = ["Head", "Chest", "Arms", "Waist", "Legs"];
    let sets: Vec<Value> = (0..per_category)
        .map(|n| {
            let pieces: Vec<Value> = kinds
                .iter()
                .map(|kind| {
                    json!({
                        "kind": kind,
                        "rarity": 6,
                        "id": format!("{}-{n}", kind.to_lowercase()),
                    })
                })
                .collect();
            json!({ "name": format!("set {n}"), "pieces": pieces })
        })
        .collect();
    Value::Array(sets)
}

pub fn test_config(url: String, output_path: &Path, count: usize) -> GeneratorConfig {
    GeneratorConfig {
        armor_sets_url: url,
        output_path: output_path.to_path_buf(),
        count,
        request_timeout: Duration::from_secs(5),
    }
}
