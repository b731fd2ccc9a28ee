//! Fetch path tests against a local HTTP server.
//!
//! Spins up an axum server serving canned search responses and drives the
//! worker's fetch function against it, covering the success path and the
//! failure classes (bad status, malformed body, connection failure) that all
//! collapse into a failed outcome.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use storysift::worker::{fetch, FetchOutcome};

async fn serve(app: Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn fetch_extracts_hits_from_the_response_body() {
    let app = Router::new().route(
        "/api/v1/search",
        get(|| async {
            Json(serde_json::json!({
                "hits": [
                    {
                        "objectID": "1",
                        "url": "https://example.org/a",
                        "title": "A",
                        "author": "x",
                        "num_comments": 1,
                        "points": 1
                    }
                ],
                "page": 0,
                "nbHits": 1
            }))
        }),
    );
    let addr = serve(app).await;
    let client = reqwest::Client::new();

    let outcome = fetch(&client, &format!("http://{addr}/api/v1/search?query=rust")).await;

    let FetchOutcome::Hits(hits) = outcome else {
        panic!("expected hits, got {outcome:?}");
    };
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].object_id, "1");
    assert_eq!(hits[0].title, "A");
}

#[tokio::test]
async fn non_2xx_status_is_a_failure() {
    let app = Router::new().route(
        "/api/v1/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = serve(app).await;
    let client = reqwest::Client::new();

    let outcome = fetch(&client, &format!("http://{addr}/api/v1/search?query=rust")).await;

    assert!(matches!(outcome, FetchOutcome::Failed(_)), "got {outcome:?}");
}

#[tokio::test]
async fn malformed_body_is_a_failure() {
    let app = Router::new().route("/api/v1/search", get(|| async { "this is not json" }));
    let addr = serve(app).await;
    let client = reqwest::Client::new();

    let outcome = fetch(&client, &format!("http://{addr}/api/v1/search?query=rust")).await;

    assert!(matches!(outcome, FetchOutcome::Failed(_)), "got {outcome:?}");
}

#[tokio::test]
async fn connection_failure_is_a_failure() {
    // Bind a port, then drop the listener so nothing is listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = reqwest::Client::new();

    let outcome = fetch(&client, &format!("http://{addr}/api/v1/search?query=rust")).await;

    assert!(matches!(outcome, FetchOutcome::Failed(_)), "got {outcome:?}");
}
