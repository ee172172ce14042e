//! Tests for the reqwest game client against a local axum fake of the service.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use chess_client::{
    Color, GameService, HttpGameClient, MoveOutcome, MoveRequest, Score, SessionContext, Square,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

/// Requests seen by the fake service.
#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<String>>>,
    move_bodies: Arc<Mutex<Vec<Value>>>,
}

async fn load(Path(id): Path<String>, State(seen): State<Seen>) -> Json<Value> {
    seen.requests.lock().unwrap().push(format!("load {}", id));
    Json(json!({
        "piecesAndPositions": {"e2": {"color": "WHITE", "notation": "P"}},
        "color": "WHITE",
        "title": "Alpha"
    }))
}

async fn reset(Path(id): Path<String>, State(seen): State<Seen>) -> Json<Value> {
    seen.requests.lock().unwrap().push(format!("reset {}", id));
    Json(json!({
        "piecesAndPositions": {
            "e2": {"color": "WHITE", "notation": "P"},
            "e7": {"color": "BLACK", "notation": "P"}
        },
        "color": "WHITE",
        "title": "Alpha"
    }))
}

async fn score(Path(id): Path<String>, State(seen): State<Seen>) -> Json<Value> {
    seen.requests.lock().unwrap().push(format!("score {}", id));
    Json(json!({"colorsScore": {"BLACK": 38, "WHITE": 37.5}}))
}

async fn make_move(
    Path(id): Path<String>,
    State(seen): State<Seen>,
    Json(body): Json<Value>,
) -> Json<Value> {
    seen.requests.lock().unwrap().push(format!("move {}", id));
    seen.move_bodies.lock().unwrap().push(body);
    Json(json!({"end": false, "team": "BLACK"}))
}

fn game_router(seen: Seen) -> Router {
    Router::new()
        .route("/games/{id}/load/", get(load))
        .route("/games/{id}/reset", get(reset))
        .route("/games/{id}/score", get(score))
        .route("/games/{id}/move", post(make_move))
        .with_state(seen)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str, game_id: &str) -> HttpGameClient {
    let context = SessionContext::new(base_url, game_id).unwrap();
    HttpGameClient::new(context, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_load_reads_game_state() {
    let seen = Seen::default();
    let base = serve(game_router(seen.clone())).await;

    let state = client(&base, "12").load().await.unwrap();

    assert_eq!(state.title, "Alpha");
    assert_eq!(state.color, Color::White);
    assert_eq!(state.pieces_and_positions.get(sq("e2")).unwrap().notation, "P");
    assert_eq!(*seen.requests.lock().unwrap(), vec!["load 12".to_string()]);
}

#[tokio::test]
async fn test_reset_reads_initial_position() {
    let seen = Seen::default();
    let base = serve(game_router(seen.clone())).await;

    let state = client(&base, "12").reset().await.unwrap();

    assert_eq!(state.pieces_and_positions.len(), 2);
    assert_eq!(*seen.requests.lock().unwrap(), vec!["reset 12".to_string()]);
}

#[tokio::test]
async fn test_score_reads_both_sides() {
    let base = serve(game_router(Seen::default())).await;

    let snapshot = client(&base, "12").score().await.unwrap();

    assert_eq!(snapshot.for_color(Color::Black), Score(38.0));
    assert_eq!(snapshot.for_color(Color::White), Score(37.5));
}

#[tokio::test]
async fn test_move_posts_from_and_to() {
    let seen = Seen::default();
    let base = serve(game_router(seen.clone())).await;

    let result = client(&base, "12")
        .submit_move(MoveRequest::new(sq("e2"), sq("e4")))
        .await
        .unwrap();

    assert_eq!(result.outcome().unwrap(), MoveOutcome::Continue);
    assert_eq!(result.extra.get("team"), Some(&json!("BLACK")));
    assert_eq!(
        *seen.move_bodies.lock().unwrap(),
        vec![json!({"from": "e2", "to": "e4"})]
    );
}

#[tokio::test]
async fn test_error_status_is_transport_failure() {
    let router = Router::new().route(
        "/games/{id}/move",
        post(|| async { (StatusCode::BAD_REQUEST, "cannot move there") }),
    );
    let base = serve(router).await;

    let err = client(&base, "12")
        .submit_move(MoveRequest::new(sq("a1"), sq("a1")))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(err.to_string().contains("cannot move there"));
}

#[tokio::test]
async fn test_missing_fields_are_malformed() {
    let router = Router::new().route(
        "/games/{id}/load/",
        get(|| async { Json(json!({"color": "WHITE"})) }),
    );
    let base = serve(router).await;

    let err = client(&base, "12").load().await.unwrap_err();

    assert!(err.is_malformed());
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let router = Router::new().route("/games/{id}/score", get(|| async { "<html>oops</html>" }));
    let base = serve(router).await;

    let err = client(&base, "12").score().await.unwrap_err();

    assert!(err.is_malformed());
}

#[tokio::test]
async fn test_unreachable_service_is_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr), "12")
        .load()
        .await
        .unwrap_err();

    assert!(err.is_transport());
}
