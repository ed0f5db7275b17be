//! Integration tests for the API client using wiremock mock server

use std::time::Duration;

use ct_client::{ApiClient, ClientError, GeocoderClient, ReportForm};
use ct_core::{
    CoreError, IncidentCategory, NewAccount, PhotoAttachment, Position, ReportStatus, Session,
    User,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

fn api(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

fn session(is_anonymous: bool) -> Session {
    Session {
        token: String::from("jwt-abc"),
        user: User {
            id: String::from("u-1"),
            username: String::from("amina"),
            email: String::from("amina@example.com"),
            is_anonymous,
        },
    }
}

#[tokio::test]
async fn test_login_success_returns_token_and_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .and(body_string_contains("amina@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-abc",
            "user": {
                "id": "u-1",
                "username": "amina",
                "email": "amina@example.com",
                "isAnonymous": false
            }
        })))
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let session = client.login("amina@example.com", "hunter2").await.unwrap();

    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.user.username, "amina");
    assert!(!session.user.is_anonymous);
}

#[tokio::test]
async fn test_login_failure_propagates_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid email or password"
        })))
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let err = client.login("x@example.com", "wrong").await.unwrap_err();

    match err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn test_login_failure_without_message_body_gets_generic_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let err = client.login("x@example.com", "pw").await.unwrap_err();

    assert!(err.to_string().contains("Request failed with status 500"));
}

#[tokio::test]
async fn test_register_sends_anonymity_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/register"))
        .and(body_string_contains("\"isAnonymous\":true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-new",
            "user": {
                "id": "u-2",
                "username": "ghost",
                "email": "ghost@example.com",
                "isAnonymous": true
            }
        })))
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let account = NewAccount {
        username: String::from("ghost"),
        email: String::from("ghost@example.com"),
        password: String::from("hunter2"),
        is_anonymous: true,
    };
    let session = client.register(&account).await.unwrap();

    assert!(session.user.is_anonymous);
}

#[tokio::test]
async fn test_submit_carries_fields_token_and_created_by() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/report/incidentupload"))
        .and(header("Authorization", "Bearer jwt-abc"))
        .and(body_string_contains("Illegal dumping"))
        .and(body_string_contains("name=\"createdBy\""))
        .and(body_string_contains("30.1"))
        .and(body_string_contains("69.2"))
        .and(body_string_contains("waste"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Incident reported successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let mut form = ReportForm::new();
    form.draft.title = String::from("Illegal dumping");
    form.draft.description = String::from("Construction waste by the river");
    form.draft.category = IncidentCategory::Waste;
    form.picker.pick_on_map(Position::new(30.1, 69.2));

    let session = session(false);
    form.submit(&client, Some(&session)).await.unwrap();

    // Success resets the draft and the selection.
    assert_eq!(form.draft.title, "");
    assert!(form.draft.location.is_none());
    assert!(form.picker.selected().is_none());
}

#[tokio::test]
async fn test_submit_for_anonymous_user_omits_created_by() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/report/incidentupload"))
        .and(body_string_contains("name=\"title\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let mut form = ReportForm::new();
    form.draft.title = String::from("Smoke plume");
    form.picker.pick_on_map(Position::new(31.5, 74.3));

    let session = session(true);
    form.submit(&client, Some(&session)).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("createdBy"));
}

#[tokio::test]
async fn test_submit_without_session_sends_no_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/report/incidentupload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let mut form = ReportForm::new();
    form.picker.pick_on_map(Position::new(30.1, 69.2));

    form.submit(&client, None).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_submit_without_location_makes_no_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/report/incidentupload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let mut form = ReportForm::new();
    form.draft.title = String::from("No location set");

    let err = form.submit(&client, None).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Core(CoreError::MissingLocation { .. })
    ));
    // Failure leaves the form untouched.
    assert_eq!(form.draft.title, "No location set");
}

#[tokio::test]
async fn test_submit_failure_leaves_draft_intact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/report/incidentupload"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Error submitting incident."
        })))
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let mut form = ReportForm::new();
    form.draft.title = String::from("Kept on failure");
    form.picker.pick_on_map(Position::new(30.1, 69.2));

    let err = form.submit(&client, None).await.unwrap_err();

    assert!(err.to_string().contains("Error submitting incident."));
    assert_eq!(form.draft.title, "Kept on failure");
    assert!(form.picker.selected().is_some());
}

#[tokio::test]
async fn test_submit_attaches_photo_part() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/report/incidentupload"))
        .and(body_string_contains("name=\"photo\""))
        .and(body_string_contains("filename=\"evidence.jpg\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let mut form = ReportForm::new();
    form.draft.photo = Some(PhotoAttachment::new("evidence.jpg", vec![0xFF, 0xD8, 0xFF]));
    form.picker.pick_on_map(Position::new(30.1, 69.2));

    form.submit(&client, None).await.unwrap();
}

#[tokio::test]
async fn test_list_reports_decodes_read_models() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/report/get/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "r-1",
                "title": "Illegal dumping in park",
                "description": "Household waste piling up",
                "category": "waste",
                "status": "new",
                "latitude": 30.1,
                "longitude": 69.2,
                "createdAt": "2024-01-01T00:00:00Z",
                "photoUrl": null
            },
            {
                "id": "r-2",
                "title": "River discoloration",
                "description": "Industrial runoff",
                "category": "water",
                "status": "in_progress",
                "latitude": 31.5,
                "longitude": 74.3,
                "createdAt": "2024-02-01T00:00:00Z",
                "photoUrl": "https://cdn.example.com/r2.jpg"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = api(&mock_server);
    let reports = client.list_reports("u-1").await.unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].id, "r-1");
    assert_eq!(reports[1].status, ReportStatus::InProgress);
}

// =========================================================================
// Geocoder
// =========================================================================

#[tokio::test]
async fn test_geocoder_takes_first_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("format", "json"))
        .and(query_param("q", "Islamabad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": "33.6938", "lon": "73.0651" },
            { "lat": "0.0", "lon": "0.0" }
        ])))
        .mount(&mock_server)
        .await;

    let geocoder = GeocoderClient::new(&mock_server.uri(), "civictrack-tests");
    let position = geocoder.search("Islamabad").await.unwrap();

    assert_eq!(position, Position::new(33.6938, 73.0651));
}

#[tokio::test]
async fn test_geocoder_empty_result_is_no_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let geocoder = GeocoderClient::new(&mock_server.uri(), "civictrack-tests");
    let err = geocoder.search("nowhere at all").await.unwrap_err();

    assert!(matches!(err, ClientError::NoMatch { .. }));
}

#[tokio::test]
async fn test_geocoder_sends_identifying_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("user-agent", "civictrack-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "lat": "1.0", "lon": "2.0" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let geocoder = GeocoderClient::new(&mock_server.uri(), "civictrack-tests");
    geocoder.search("anywhere").await.unwrap();
}
