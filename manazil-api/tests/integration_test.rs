use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use manazil_api::{app, AppState};
use manazil_core::RecordingSink;
use manazil_store::SessionRegistry;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let state = AppState::with_sink(SessionRegistry::new(16), sink.clone());
    (app(state), sink)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, value)
}

async fn open_session(app: &Router) -> String {
    let (status, _, body) = send(app, Method::POST, "/v1/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_new_session_starts_empty() {
    let (app, _) = test_app();
    let (status, _, body) = send(&app, Method::POST, "/v1/sessions", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["current_step"], "LANDING");
    let selections = &body["selections"];
    assert_eq!(selections["services"], json!({"flights": false, "hotel": false, "visa_bus": false}));
    assert_eq!(selections["selected_hotel_id"], Value::Null);
    assert_eq!(selections["number_of_seats"], 1);
}

#[tokio::test]
async fn test_deep_link_without_services_redirects() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    let (status, headers, body) = send(
        &app,
        Method::GET,
        &format!("/v1/sessions/{}/navigate?path=/confirmation", id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers[header::LOCATION],
        format!("/v1/sessions/{}/navigate?path=/select-service", id).as_str()
    );
    assert_eq!(body["navigation"], json!({"decision": "redirect", "step": "SERVICE_SELECTION"}));
    assert_eq!(body["view"]["step"], "SERVICE_SELECTION");
    assert_eq!(body["view"]["can_proceed"], false);
}

#[tokio::test]
async fn test_flight_flow_reaches_hotel_selection() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/v1/sessions/{}/services/flights", id),
        Some(json!({"checked": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["next_step"], "FLIGHT_DETAILS");

    // Incomplete details keep hotel selection closed
    let (status, _, _) = send(
        &app,
        Method::GET,
        &format!("/v1/sessions/{}/navigate?path=/hotel-selection", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/v1/sessions/{}/flight", id),
        Some(json!({"origin": "CGK", "duration": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selections"]["flight_details"]["origin"], "CGK");
    assert_eq!(body["view"]["can_proceed"], true);

    let (status, _, body) = send(
        &app,
        Method::GET,
        &format!("/v1/sessions/{}/navigate?path=/hotel-selection", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["navigation"]["decision"], "allow");
    assert_eq!(body["view"]["hotels"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_invalid_flight_values_are_rejected() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/v1/sessions/{}/flight", id),
        Some(json!({"origin": "LHR"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("LHR"));

    let (status, _, _) = send(
        &app,
        Method::PUT,
        &format!("/v1/sessions/{}/flight", id),
        Some(json!({"duration": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_service_kind() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    let (status, _, _) = send(
        &app,
        Method::POST,
        &format!("/v1/sessions/{}/services/train/toggle", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_hotel_selection_toggles() {
    let (app, _) = test_app();
    let id = open_session(&app).await;
    let uri = format!("/v1/sessions/{}/hotel/nozol_makkah", id);

    let (status, _, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selections"]["selected_hotel_id"], "nozol_makkah");

    let (_, _, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(body["selections"]["selected_hotel_id"], Value::Null);

    let (status, _, _) = send(
        &app,
        Method::POST,
        &format!("/v1/sessions/{}/hotel/closed_hotel", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hotel_quick_search_filters_catalog() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    let (status, _, body) = send(
        &app,
        Method::POST,
        &format!("/v1/sessions/{}/quick-search", id),
        Some(json!({
            "kind": "hotel",
            "destination": "Jeddah",
            "check_in": "2025-04-02",
            "nights": 3,
            "guests": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["navigation"], json!({"decision": "allow", "step": "HOTEL_SELECTION"}));
    let hotels = body["view"]["hotels"].as_array().unwrap();
    assert_eq!(hotels.len(), 2);
    assert!(hotels.iter().all(|hotel| hotel["city"] == "Jeddah"));

    let (_, _, listed) = send(&app, Method::GET, &format!("/v1/sessions/{}/hotels", id), None).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_featured_hotel_lands_on_hotel_selection() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    let (status, _, body) = send(
        &app,
        Method::POST,
        &format!("/v1/sessions/{}/featured/ritz_madinah", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["view"]["selected_hotel_id"], "ritz_madinah");
    assert_eq!(body["view"]["next_step"], "CONFIRMATION");

    let (status, _, _) = send(
        &app,
        Method::POST,
        &format!("/v1/sessions/{}/featured/nowhere", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seats_validation() {
    let (app, _) = test_app();
    let id = open_session(&app).await;
    let uri = format!("/v1/sessions/{}/seats", id);

    let (status, _, body) = send(&app, Method::PUT, &uri, Some(json!({"input": "4"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selections"]["number_of_seats"], 4);

    let (status, _, _) = send(&app, Method::PUT, &uri, Some(json!({"input": "101"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Rejected input leaves the stored count alone
    let (_, _, selections) = send(&app, Method::GET, &format!("/v1/sessions/{}/selections", id), None).await;
    assert_eq!(selections["number_of_seats"], 4);

    let (status, _, body) = send(&app, Method::PUT, &uri, Some(json!({"input": ""}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selections"]["number_of_seats"], 1);
}

#[tokio::test]
async fn test_submit_hands_off_and_resets() {
    let (app, sink) = test_app();
    let id = open_session(&app).await;

    // Nothing selected yet
    let (status, _, _) = send(&app, Method::POST, &format!("/v1/sessions/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(sink.events().is_empty());

    send(
        &app,
        Method::POST,
        &format!("/v1/sessions/{}/services/visa_bus/toggle", id),
        None,
    )
    .await;
    send(&app, Method::PUT, &format!("/v1/sessions/{}/seats", id), Some(json!({"input": "3"}))).await;

    let (_, _, summary) = send(&app, Method::GET, &format!("/v1/sessions/{}/summary", id), None).await;
    assert_eq!(summary["can_submit"], true);
    assert_eq!(summary["summary"]["visa_bus"], true);
    assert_eq!(summary["summary"]["flight"], Value::Null);

    let (status, _, body) = send(&app, Method::POST, &format!("/v1/sessions/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["path"], "/");

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].selections["number_of_seats"], 3);
    assert_eq!(events[0].selections["services"]["visa_bus"], true);
    assert_eq!(body["submission_id"], events[0].submission_id.to_string());

    let (_, _, session) = send(&app, Method::GET, &format!("/v1/sessions/{}", id), None).await;
    assert_eq!(session["current_step"], "LANDING");
    assert_eq!(session["selections"]["services"]["visa_bus"], false);
    assert_eq!(session["selections"]["number_of_seats"], 1);
}

#[tokio::test]
async fn test_back_rechecks_previous_step() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    send(&app, Method::PUT, &format!("/v1/sessions/{}/services/flights", id), Some(json!({"checked": true}))).await;
    send(&app, Method::PUT, &format!("/v1/sessions/{}/services/hotel", id), Some(json!({"checked": true}))).await;
    send(&app, Method::GET, &format!("/v1/sessions/{}/navigate?path=/flight-details", id), None).await;
    send(&app, Method::GET, &format!("/v1/sessions/{}/navigate?path=/hotel-selection", id), None).await;

    send(&app, Method::PUT, &format!("/v1/sessions/{}/services/flights", id), Some(json!({"checked": false}))).await;

    let (status, _, body) = send(&app, Method::POST, &format!("/v1/sessions/{}/back", id), None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(body["navigation"], json!({"decision": "redirect", "step": "SERVICE_SELECTION"}));
}

#[tokio::test]
async fn test_reauthenticate_resets_booking() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    send(&app, Method::POST, &format!("/v1/sessions/{}/services/hotel/toggle", id), None).await;
    let (status, _, body) = send(&app, Method::POST, &format!("/v1/sessions/{}/reauthenticate", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["path"], "/select-service");
    assert_eq!(body["selections"]["services"]["hotel"], false);
}

#[tokio::test]
async fn test_closed_session_is_gone() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    let (status, _, _) = send(&app, Method::DELETE, &format!("/v1/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, body) = send(&app, Method::GET, &format!("/v1/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("No active booking session"));
}

#[tokio::test]
async fn test_hotel_catalog_search() {
    let (app, _) = test_app();

    let (status, _, body) = send(&app, Method::GET, "/v1/hotels?q=odst", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _, body) = send(&app, Method::GET, "/v1/hotels/zowar_intl", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Zowar International Hotel");

    let (_, _, body) = send(&app, Method::GET, "/v1/hotels", None).await;
    assert_eq!(body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_malformed_requests_get_json_errors() {
    let (app, _) = test_app();
    let id = open_session(&app).await;

    // Duration does not fit the field at all
    let (status, _, body) = send(
        &app,
        Method::PUT,
        &format!("/v1/sessions/{}/flight", id),
        Some(json!({"duration": 300})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (status, _, body) = send(&app, Method::GET, &format!("/v1/sessions/{}/navigate", id), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _, body) = send(&app, Method::GET, "/v1/sessions/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/v1/sessions/{}/seats", id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"input\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_quick_search_supersedes_rejected_seat_entry() {
    let (app, sink) = test_app();
    let id = open_session(&app).await;

    send(&app, Method::POST, &format!("/v1/sessions/{}/services/visa_bus/toggle", id), None).await;
    let (status, _, _) = send(&app, Method::PUT, &format!("/v1/sessions/{}/seats", id), Some(json!({"input": "500"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _, _) = send(
        &app,
        Method::POST,
        &format!("/v1/sessions/{}/quick-search", id),
        Some(json!({"kind": "transport", "passengers": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(&app, Method::POST, &format!("/v1/sessions/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(sink.events()[0].selections["number_of_seats"], 3);
}
