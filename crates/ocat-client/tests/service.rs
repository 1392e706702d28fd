use jiff::civil::date;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ocat_client::AssessmentService;
use ocat_client::error::ClientError;
use ocat_core::models::assessment::NewAssessment;
use ocat_core::models::risk::RiskLevel;

fn stored_whiskers(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "catName": "Whiskers",
        "catDateOfBirth": "2020-01-01",
        "instrumentType": 1,
        "score": 2,
        "riskLevel": "medium",
        "createdAt": "2024-03-01T12:00:00Z",
        "deletedAt": null,
    })
}

#[tokio::test]
async fn get_list_parses_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assessments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_whiskers(3)])))
        .mount(&server)
        .await;

    let service = AssessmentService::new(&server.uri()).unwrap();
    let list = service.get_list().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, 3);
    assert_eq!(list[0].cat_date_of_birth, date(2020, 1, 1));
    assert_eq!(list[0].risk_level, RiskLevel::Medium);
}

#[tokio::test]
async fn submit_posts_camel_case_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/assessments"))
        .and(body_json(json!({
            "catName": "Whiskers",
            "catDateOfBirth": "2020-01-01",
            "instrumentType": 1,
            "score": 2,
            "riskLevel": "medium",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_whiskers(11)))
        .expect(1)
        .mount(&server)
        .await;

    let service = AssessmentService::new(&server.uri()).unwrap();
    let new = NewAssessment::scored("Whiskers", date(2020, 1, 1), 1, 2);
    let stored = service.submit(&new).await.unwrap();
    assert_eq!(stored.id, 11);
    assert_eq!(stored.cat_name, "Whiskers");
}

#[tokio::test]
async fn service_error_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/assessments"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "missing required field: catName"})),
        )
        .mount(&server)
        .await;

    let service = AssessmentService::new(&server.uri()).unwrap();
    let new = NewAssessment::scored("Whiskers", date(2020, 1, 1), 1, 2);
    let err = service.submit(&new).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "missing required field: catName");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assessments"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = AssessmentService::new(&server.uri()).unwrap();
    let err = service.get_list().await.unwrap_err();
    assert_eq!(err.to_string(), "Service Unavailable");
}

#[tokio::test]
async fn unknown_status_without_body_has_empty_message() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/assessments/4"))
        .respond_with(ResponseTemplate::new(599))
        .mount(&server)
        .await;

    let service = AssessmentService::new(&server.uri()).unwrap();
    match service.remove(4).await.unwrap_err() {
        ClientError::Api { status, message } => {
            assert_eq!(status, 599);
            assert!(message.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn remove_reports_deleted_flag() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/assessments/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/assessments/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": false})))
        .mount(&server)
        .await;

    let service = AssessmentService::new(&server.uri()).unwrap();
    assert!(service.remove(4).await.unwrap());
    assert!(!service.remove(5).await.unwrap());
}

#[test]
fn rejects_non_http_base_url() {
    assert!(matches!(
        AssessmentService::new("ftp://example.com"),
        Err(ClientError::InvalidUrl { .. })
    ));
    let service = AssessmentService::new("http://localhost:3001/").unwrap();
    assert_eq!(service.base_url(), "http://localhost:3001");
}
