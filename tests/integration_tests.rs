use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use chrono::NaiveDateTime;
use tower::ServiceExt;

use visitdesk::config::AppConfig;
use visitdesk::handlers;
use visitdesk::i18n::Locale;
use visitdesk::models::{BookingRequest, TimeSlot};
use visitdesk::services::clock::FixedClock;
use visitdesk::services::submission::BookingSink;
use visitdesk::state::AppState;

// ── Mock Sink ──

struct RecordingSink {
    received: Arc<Mutex<Vec<BookingRequest>>>,
}

#[async_trait]
impl BookingSink for RecordingSink {
    async fn submit(&self, request: &BookingRequest) {
        self.received.lock().unwrap().push(request.clone());
    }
}

// ── Helpers ──

fn test_config(locale: Locale) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1".to_string(),
        port: 3000,
        locale,
    }
}

fn now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-10-19 10:00", "%Y-%m-%d %H:%M").unwrap()
}

fn test_state_with_received(
    locale: Locale,
) -> (Arc<AppState>, Arc<Mutex<Vec<BookingRequest>>>) {
    let received = Arc::new(Mutex::new(vec![]));
    let state = Arc::new(AppState {
        config: test_config(locale),
        clock: Box::new(FixedClock(now())),
        sink: Box::new(RecordingSink {
            received: Arc::clone(&received),
        }),
    });
    (state, received)
}

fn test_state() -> Arc<AppState> {
    test_state_with_received(Locale::Ar).0
}

fn test_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::landing::landing_page))
        .route("/book", get(handlers::booking::booking_page))
        .route("/book", post(handlers::booking::submit_booking))
        .route("/styles.css", get(handlers::landing::styles))
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", post(handlers::api::create_booking))
        .route("/api/slots", get(handlers::api::get_slots))
        .route("/api/calendar", get(handlers::api::get_calendar))
        .route("/api/features", get(handlers::api::get_features))
        .with_state(state)
}

fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/book")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/bookings")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(res: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(res).await).unwrap()
}

const VALID_FORM: &str = "name=Al&email=a%40b.com&phone=0501234567&organization=NGO\
    &visitReason=Tour&message=Looking+forward+to+it\
    &appointmentDate=2026-10-20&appointmentTime=3%3A00+PM";

fn valid_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Alice",
        "email": "alice@example.com",
        "phone": "0501234567",
        "organization": "Council",
        "visitReason": "Meeting",
        "message": "Discuss the grant programme",
        "appointmentDate": "2026-11-02",
        "appointmentTime": "10:00 AM"
    })
}

// ── Pages ──

#[tokio::test]
async fn test_health() {
    let res = test_app(test_state()).oneshot(get_request("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "ok");
}

#[tokio::test]
async fn test_landing_page() {
    let res = test_app(test_state()).oneshot(get_request("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_string(res).await;
    assert!(html.contains("dir=\"rtl\""));
    assert_eq!(html.matches("<article class=\"card\"").count(), 3);
    assert!(html.contains("شخصية المجلس"));
}

#[tokio::test]
async fn test_stylesheet() {
    let res = test_app(test_state()).oneshot(get_request("/styles.css")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(res).await.contains("--gradient-card-1"));
}

#[tokio::test]
async fn test_booking_page_defaults_to_current_month() {
    let res = test_app(test_state()).oneshot(get_request("/book")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_string(res).await;
    assert!(html.contains("حجز موعد زيارة"));
    assert!(html.contains("أكتوبر 2026"));
    assert!(html.contains("value=\"2026-10-19\" disabled>"));
    assert!(html.contains("value=\"2026-10-20\">"));
}

#[tokio::test]
async fn test_booking_page_month_navigation_keeps_values() {
    let res = test_app(test_state())
        .oneshot(get_request(
            "/book?name=Alice&appointmentTime=2%3A00+PM&appointmentDate=2026-10-25&month=2026-11",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_string(res).await;
    assert!(html.contains("نوفمبر 2026"));
    assert!(html.contains("value=\"Alice\""));
    assert!(html.contains("value=\"2:00 PM\" checked>"));
    assert!(html.contains("value=\"2026-10-25\" checked>"));
    assert!(!html.contains("field-error"));
}

#[tokio::test]
async fn test_booking_page_bad_month() {
    let res = test_app(test_state())
        .oneshot(get_request("/book?month=2026-13"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let json = body_json(res).await;
    assert!(json["error"].as_str().unwrap().contains("2026-13"));
}

#[tokio::test]
async fn test_booking_page_out_of_range_date() {
    let res = test_app(test_state())
        .oneshot(get_request("/book?appointmentDate=%2B262142-12-15"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_string(res).await;
    assert!(html.contains("أكتوبر 2026"));
    assert!(!html.contains("262142"));
}

#[tokio::test]
async fn test_booking_page_drops_past_date_from_other_month() {
    let res = test_app(test_state())
        .oneshot(get_request("/book?appointmentDate=2026-10-18&month=2026-11"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_string(res).await;
    assert!(!html.contains("value=\"2026-10-18\""));
    assert!(!html.contains(" checked"));
    assert!(html.contains("اختر التاريخ"));
}

// ── Form Submission ──

#[tokio::test]
async fn test_submit_valid_form_resets_and_notifies() {
    let (state, received) = test_state_with_received(Locale::Ar);
    let res = test_app(state).oneshot(form_request(VALID_FORM)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let html = body_string(res).await;
    assert!(html.contains("تم إرسال طلب الحجز بنجاح!"));
    assert!(!html.contains("value=\"Al\""));
    assert!(!html.contains(" checked"));
    assert!(!html.contains("field-error"));

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name, "Al");
    assert_eq!(received[0].email, "a@b.com");
    assert_eq!(received[0].appointment_time, TimeSlot::ThreePm);
}

#[tokio::test]
async fn test_submit_empty_form_flags_every_field() {
    let (state, received) = test_state_with_received(Locale::Ar);
    let res = test_app(state).oneshot(form_request("")).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(res).await;
    for key in [
        "name",
        "email",
        "phone",
        "organization",
        "visitReason",
        "message",
        "appointmentDate",
        "appointmentTime",
    ] {
        assert!(
            html.contains(&format!("data-field=\"{key}\"")),
            "missing error for {key}"
        );
    }
    assert!(!html.contains("toast"));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_invalid_keeps_values() {
    let (state, received) = test_state_with_received(Locale::Ar);
    let body = VALID_FORM.replace("name=Al", "name=A").replace("a%40b.com", "abc");
    let res = test_app(state).oneshot(form_request(&body)).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(res).await;
    assert!(html.contains("الاسم يجب أن يكون حرفين على الأقل"));
    assert!(html.contains("البريد الإلكتروني غير صحيح"));
    assert!(html.contains("value=\"abc\""));
    assert!(html.contains("value=\"3:00 PM\" checked>"));
    assert!(!html.contains("data-field=\"phone\""));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_today_is_rejected() {
    let (state, received) = test_state_with_received(Locale::En);
    let body = VALID_FORM.replace("2026-10-20", "2026-10-19");
    let res = test_app(state).oneshot(form_request(&body)).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(res).await;
    assert!(html.contains("This date cannot be booked"));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_out_of_range_date_does_not_panic() {
    let (state, received) = test_state_with_received(Locale::En);
    let body = VALID_FORM.replace("2026-10-20", "%2B262142-12-15");
    let res = test_app(state).oneshot(form_request(&body)).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(res).await;
    assert!(html.contains("Please choose a visit date"));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_undotted_email_domain_is_rejected() {
    let (state, received) = test_state_with_received(Locale::En);
    let body = VALID_FORM.replace("a%40b.com", "a%40b");
    let res = test_app(state).oneshot(form_request(&body)).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(res).await;
    assert!(html.contains("data-field=\"email\">Invalid email address</p>"));
    assert!(received.lock().unwrap().is_empty());
}

// ── JSON API ──

#[tokio::test]
async fn test_api_create_booking() {
    let (state, received) = test_state_with_received(Locale::En);
    let res = test_app(state).oneshot(json_request(valid_json())).await.unwrap();

    assert_eq!(res.status(), StatusCode::ACCEPTED);
    let json = body_json(res).await;
    assert_eq!(json["status"], "accepted");
    assert_eq!(json["message"], "Your booking request was sent!");

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].visit_reason, "Meeting");
    assert_eq!(received[0].appointment_time, TimeSlot::TenAm);
}

#[tokio::test]
async fn test_api_create_booking_reports_all_errors() {
    let (state, received) = test_state_with_received(Locale::En);
    let mut body = valid_json();
    body["email"] = "abc".into();
    body["phone"] = "123".into();
    body["appointmentTime"] = "1:00 PM".into();

    let res = test_app(state).oneshot(json_request(body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(res).await;
    assert_eq!(json["error"], "validation failed");
    let errors = json["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors["email"][0], "Invalid email address");
    assert_eq!(errors["phone"][0], "Mobile number must be at least 10 digits");
    assert_eq!(errors["appointmentTime"][0], "Please choose a visit time");
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_slots() {
    let res = test_app(test_state()).oneshot(get_request("/api/slots")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(
        json,
        serde_json::json!(["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"])
    );
}

#[tokio::test]
async fn test_api_calendar() {
    let res = test_app(test_state())
        .oneshot(get_request("/api/calendar?month=2026-10"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["month"], "2026-10");

    let days: Vec<&serde_json::Value> = json["weeks"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|w| w.as_array().unwrap())
        .filter(|d| !d.is_null())
        .collect();
    assert_eq!(days.len(), 31);
    for day in days {
        let date = day["date"].as_str().unwrap();
        let expected = date > "2026-10-19";
        assert_eq!(day["selectable"], expected, "{date}");
    }
}

#[tokio::test]
async fn test_api_calendar_default_and_invalid_month() {
    let res = test_app(test_state()).oneshot(get_request("/api/calendar")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["month"], "2026-10");

    let res = test_app(test_state())
        .oneshot(get_request("/api/calendar?month="))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["month"], "2026-10");

    let res = test_app(test_state())
        .oneshot(get_request("/api/calendar?month=%2B202-01"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = test_app(test_state())
        .oneshot(get_request("/api/calendar?month=soon"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_features() {
    let res = test_app(test_state()).oneshot(get_request("/api/features")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    let features = json["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["icon"], "users");
    assert_eq!(features[1]["icon"], "zap");
    assert_eq!(features[2]["icon"], "target");
    assert_eq!(features[2]["gradient"], "--gradient-card-3");
}
