use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tavola_core::TavolaError;
use tavola_core::chat::{ActionType, ChatGateway, ChatRequest, ConversationContext};
use tavola_core::config::ClientConfig;
use tavola_core::reservation::{ReservationDraft, ReservationGateway, TimeWindow};
use tavola_core::search::{SearchFilters, SearchGateway};
use tavola_interaction::HttpApiClient;

#[derive(Clone, Default)]
struct Recorded {
    bodies: Arc<Mutex<Vec<Value>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn spawn_server(app: Router) -> HttpApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig {
        base_url: format!("http://{addr}/"),
        timeout_secs: 5,
    };
    HttpApiClient::new(&config).unwrap()
}

async fn chat_handler(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    recorded.bodies.lock().unwrap().push(body);
    Json(json!({
        "reply": "Try this:\n- Luigi's (Rating: 4, Distance: 2, Price: 30, Cuisine: Italian)",
        "pendingAction": { "type": "PENDING_RESERVATION" },
        "context": { "lastIntent": "RESERVE", "lastRestaurantIds": [1] }
    }))
}

#[tokio::test]
async fn test_chat_round_trip() {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/agents/chat", post(chat_handler))
        .with_state(recorded.clone());
    let client = spawn_server(app).await;

    let reply = client
        .send_chat(ChatRequest {
            message: "book Luigi's".into(),
            context: Some(ConversationContext::new(json!({ "lastIntent": "SEARCH" }))),
        })
        .await
        .unwrap();

    assert_eq!(
        reply.pending_action.unwrap().action_type,
        ActionType::PendingReservation
    );
    assert_eq!(reply.context.unwrap().as_value()["lastRestaurantIds"], json!([1]));

    let bodies = recorded.bodies.lock().unwrap();
    assert_eq!(
        bodies[0],
        json!({ "message": "book Luigi's", "context": { "lastIntent": "SEARCH" } })
    );
}

#[tokio::test]
async fn test_non_success_status_maps_to_http_error() {
    let app = Router::new().route(
        "/agents/chat",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model unavailable") }),
    );
    let client = spawn_server(app).await;

    let err = client
        .send_chat(ChatRequest {
            message: "hi".into(),
            context: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Server error: 500");
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let app = Router::new().route("/agents/chat", post(|| async { "not json" }));
    let client = spawn_server(app).await;

    let err = client
        .send_chat(ChatRequest {
            message: "hi".into(),
            context: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TavolaError::Serialization { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpApiClient::new(&ClientConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
    })
    .unwrap();

    let err = client.list_reservations(1, None).await.unwrap_err();
    assert!(err.is_transport());
}

async fn list_handler(
    State(recorded): State<Recorded>,
    Path(id): Path<i64>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    recorded.queries.lock().unwrap().push(query);
    Json(json!([
        { "id": 1, "restaurantId": id, "startTime": "2025-01-10T18:00:00", "endTime": "2025-01-10T19:00:00" }
    ]))
}

async fn create_handler(State(recorded): State<Recorded>, Json(body): Json<Value>) -> StatusCode {
    let taken = body["guestCount"] == json!(99);
    recorded.bodies.lock().unwrap().push(body);
    if taken {
        StatusCode::CONFLICT
    } else {
        StatusCode::CREATED
    }
}

fn reservation_app(recorded: &Recorded) -> Router {
    Router::new()
        .route("/reservations/restaurant/:id", get(list_handler))
        .route("/reservations", post(create_handler))
        .with_state(recorded.clone())
}

#[tokio::test]
async fn test_list_reservations_with_and_without_window() {
    let recorded = Recorded::default();
    let client = spawn_server(reservation_app(&recorded)).await;

    let all = client.list_reservations(7, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].start_time, "2025-01-10T18:00:00");

    let window = TimeWindow::new("2025-01-06T00:00:00-05:00", "2025-01-13T00:00:00-05:00");
    client.list_reservations(7, Some(&window)).await.unwrap();

    let queries = recorded.queries.lock().unwrap();
    assert!(queries[0].is_empty());
    assert_eq!(queries[1]["start"], "2025-01-06T00:00:00");
    assert_eq!(queries[1]["end"], "2025-01-13T00:00:00");
}

#[tokio::test]
async fn test_create_reservation_posts_draft() {
    let recorded = Recorded::default();
    let client = spawn_server(reservation_app(&recorded)).await;
    let mut draft = ReservationDraft {
        restaurant_id: 7,
        name: "Ada".into(),
        guest_count: 2,
        start_time: "2025-01-10T18:00:00".into(),
        end_time: "2025-01-10T19:00:00".into(),
    };

    client.create_reservation(&draft).await.unwrap();

    draft.guest_count = 99;
    let err = client.create_reservation(&draft).await.unwrap_err();
    assert_eq!(err.status(), Some(409));

    let bodies = recorded.bodies.lock().unwrap();
    assert_eq!(
        bodies[0],
        json!({
            "restaurantId": 7,
            "reservationName": "Ada",
            "guestCount": 2,
            "startTime": "2025-01-10T18:00:00",
            "endTime": "2025-01-10T19:00:00"
        })
    );
}

async fn search_handler(
    State(recorded): State<Recorded>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    recorded.queries.lock().unwrap().push(query);
    Json(json!([
        { "id": 1, "name": "Luigi's", "rating": 4, "distance": 2, "price": 30, "cuisineId": 3, "cuisine": "Italian" }
    ]))
}

#[tokio::test]
async fn test_search_omits_blank_filters() {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/search/advanced", get(search_handler))
        .with_state(recorded.clone());
    let client = spawn_server(app).await;

    let filters = SearchFilters {
        name: Some("   ".into()),
        rating: Some(4),
        cuisine: Some("Italian".into()),
        ..Default::default()
    };
    let restaurants = client.search_restaurants(&filters).await.unwrap();

    assert_eq!(restaurants[0].name, "Luigi's");
    assert_eq!(restaurants[0].cuisine_id, Some(3));

    let queries = recorded.queries.lock().unwrap();
    assert_eq!(queries[0].len(), 2);
    assert_eq!(queries[0]["rating"], "4");
    assert_eq!(queries[0]["cuisine"], "Italian");
}
