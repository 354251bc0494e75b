// seatmap-client/tests/http_client.rs
// Integration tests against an in-process stub of the table service.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use seatmap_client::{ClientConfig, ClientError, TableApi};
use shared::client::ReservationRequest;
use shared::models::{FloorTable, Seat, TableShape};

#[derive(Default)]
struct StubState {
    seed_calls: AtomicUsize,
    tables: std::sync::Mutex<Vec<FloorTable>>,
}

fn demo_table() -> FloorTable {
    FloorTable {
        id: "T1".to_string(),
        name: "Window".to_string(),
        shape: TableShape::Round,
        width: 200.0,
        height: 200.0,
        rotation: 0.0,
        color: Some("#22d3ee".to_string()),
        seats: (1..=4)
            .map(|i| Seat {
                label: format!("S{i}"),
                reserved: false,
            })
            .collect(),
    }
}

async fn list_tables(State(state): State<Arc<StubState>>) -> impl IntoResponse {
    let tables = state.tables.lock().unwrap().clone();
    Json(serde_json::json!({ "items": tables }))
}

async fn seed(State(state): State<Arc<StubState>>) -> impl IntoResponse {
    state.seed_calls.fetch_add(1, Ordering::SeqCst);
    *state.tables.lock().unwrap() = vec![demo_table()];
    StatusCode::OK
}

async fn reserve(
    State(state): State<Arc<StubState>>,
    Json(req): Json<ReservationRequest>,
) -> impl IntoResponse {
    let mut tables = state.tables.lock().unwrap();
    let Some(table) = tables.iter_mut().find(|t| t.id == req.table_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "detail": "Table not found" })),
        );
    };
    let Some(seat) = table.seats.get_mut(req.seat_index) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": "Invalid seat index" })),
        );
    };
    if seat.reserved {
        return (
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "detail": "Seat already reserved" })),
        );
    }
    seat.reserved = true;
    (StatusCode::OK, Json(serde_json::json!({ "ok": true })))
}

async fn start_stub(state: Arc<StubState>) -> SocketAddr {
    let app = Router::new()
        .route("/tables", get(list_tables))
        .route("/seed", post(seed))
        .route("/reserve", post(reserve))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> seatmap_client::HttpClient {
    ClientConfig::new(format!("http://{addr}"))
        .with_timeout(5)
        .build_http_client()
}

#[tokio::test]
async fn list_tables_decodes_items() {
    let state = Arc::new(StubState::default());
    *state.tables.lock().unwrap() = vec![demo_table()];
    let client = client_for(start_stub(state).await);

    let tables = client.list_tables().await.unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].id, "T1");
    assert_eq!(tables[0].seats.len(), 4);
}

#[tokio::test]
async fn seed_populates_tables() {
    let state = Arc::new(StubState::default());
    let client = client_for(start_stub(state.clone()).await);

    assert!(client.list_tables().await.unwrap().is_empty());
    client.seed().await.unwrap();
    assert_eq!(state.seed_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.list_tables().await.unwrap().len(), 1);
}

#[tokio::test]
async fn reserve_round_trip_marks_seat() {
    let state = Arc::new(StubState::default());
    *state.tables.lock().unwrap() = vec![demo_table()];
    let client = client_for(start_stub(state).await);

    let req = ReservationRequest {
        table_id: "T1".to_string(),
        seat_index: 2,
        name: "Ada Lovelace".to_string(),
    };
    client.reserve(&req).await.unwrap();

    // the flag is only visible through a refetch
    let tables = client.list_tables().await.unwrap();
    assert!(tables[0].seats[2].reserved);
    assert!(!tables[0].seats[0].reserved);
}

#[tokio::test]
async fn reserve_conflict_surfaces_detail() {
    let state = Arc::new(StubState::default());
    let mut table = demo_table();
    table.seats[1].reserved = true;
    *state.tables.lock().unwrap() = vec![table];
    let client = client_for(start_stub(state).await);

    let req = ReservationRequest {
        table_id: "T1".to_string(),
        seat_index: 1,
        name: "Grace Hopper".to_string(),
    };
    let err = client.reserve(&req).await.unwrap_err();
    match &err {
        ClientError::Rejected { status, detail } => {
            assert_eq!(*status, StatusCode::CONFLICT);
            assert_eq!(detail.as_deref(), Some("Seat already reserved"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.message(), "Seat already reserved");
}

#[tokio::test]
async fn reserve_unknown_table_is_rejected() {
    let state = Arc::new(StubState::default());
    let client = client_for(start_stub(state).await);

    let req = ReservationRequest {
        table_id: "missing".to_string(),
        seat_index: 0,
        name: "Alan Turing".to_string(),
    };
    let err = client.reserve(&req).await.unwrap_err();
    assert_eq!(err.message(), "Table not found");
}
