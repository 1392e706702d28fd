use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ocat_client::AssessmentService;
use ocat_web::app;
use ocat_web::config::WebConfig;
use ocat_web::state::WebState;

fn web_app(api_url: &str) -> Router {
    let service = AssessmentService::new(api_url).unwrap();
    app(WebState::new(service).unwrap())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/assessments/new")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const WHISKERS_FORM: &str =
    "catName=Whiskers&catDateOfBirth=2020-01-01&q1=1&q2=1&q3=0&q4=0&q5=0&instrumentType=1";

fn stored(id: i64, name: &str, score: u8, risk: &str) -> serde_json::Value {
    json!({
        "id": id,
        "catName": name,
        "catDateOfBirth": "2020-01-01",
        "instrumentType": 1,
        "score": score,
        "riskLevel": risk,
        "createdAt": "2024-03-01T12:00:00Z",
        "deletedAt": null,
    })
}

#[tokio::test]
async fn list_renders_rows_with_risk_colors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assessments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            stored(2, "Whiskers", 2, "medium"),
            stored(1, "Tom", 5, "high"),
        ])))
        .mount(&server)
        .await;

    let app = web_app(&server.uri());
    let (status, _, html) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Assessment List"));
    assert!(html.contains("Whiskers"));
    assert!(html.contains("2020-01-01"));
    assert!(html.contains("background-color: orange"));
    assert!(html.contains("background-color: red"));
    assert!(html.contains("Page <strong>1</strong> of 1"));
}

#[tokio::test]
async fn list_escapes_cat_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assessments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([stored(1, "<script>x</script>", 0, "low")])),
        )
        .mount(&server)
        .await;

    let app = web_app(&server.uri());
    let (_, _, html) = send(&app, get("/")).await;
    assert!(!html.contains("<script>x</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn failed_fetch_renders_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assessments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = web_app(&server.uri());
    let (status, _, html) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No data was found"));
}

#[tokio::test]
async fn form_lists_instrument_questions() {
    let app = web_app("http://127.0.0.1:9");
    let (status, _, html) = send(&app, get("/assessments/new")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Cat Behavioral Instrument"));
    assert!(html.contains("1) Previous contact with the Cat Judicial System"));
    assert!(html.contains("5) Hisses at strangers"));
}

#[tokio::test]
async fn valid_submission_posts_scored_payload_and_redirects() {
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
        .respond_with(ResponseTemplate::new(200).set_body_json(stored(7, "Whiskers", 2, "medium")))
        .expect(1)
        .mount(&server)
        .await;

    let app = web_app(&server.uri());
    let (status, location, _) = send(&app, post_form(WHISKERS_FORM)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn invalid_submission_rerenders_with_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = web_app(&server.uri());
    let (status, _, html) = send(&app, post_form("catDateOfBirth=2020-01-01&q1=1")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Cat name is required"));
    assert!(html.contains("This question is required."));
    assert!(html.contains("value=\"2020-01-01\""));
}

#[tokio::test]
async fn rejected_submission_shows_alert() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assessments"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "unknown instrument type: 1"})),
        )
        .mount(&server)
        .await;

    let app = web_app(&server.uri());
    let (status, _, html) = send(&app, post_form(WHISKERS_FORM)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("unknown instrument type: 1"));
}

#[tokio::test]
async fn submission_without_error_text_shows_generic_alert() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assessments"))
        .respond_with(ResponseTemplate::new(599))
        .mount(&server)
        .await;

    let app = web_app(&server.uri());
    let (status, _, html) = send(&app, post_form(WHISKERS_FORM)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Submit Failed"));
}

#[test]
fn config_defaults() {
    let config = WebConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config.api_url, "http://127.0.0.1:3001");
    assert_eq!(config.bind.port(), 3000);
}
