//! Integration tests for the submission endpoints.
//!
//! These drive the axum router in-process and substitute instrumented store
//! and notifier adapters to verify the best-effort side-effect contract:
//! validation failures perform zero side effects, and a failure in either
//! side effect neither blocks the other nor changes the response.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use intake::config::Config;
use intake::forms::{project_request, DraftRecord};
use intake::notify::Notifier;
use intake::rest::{build_router, ApiState};
use intake::store::SubmissionStore;

// ─── Instrumented Adapters ────────────────────────────────────────────────────

#[derive(Default)]
struct MockStore {
    inserts: AtomicUsize,
    fail: bool,
    last: Mutex<Option<(String, Value)>>,
}

impl MockStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn last_insert(&self) -> Option<(String, Value)> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionStore for MockStore {
    async fn insert(&self, collection: &str, document: &Value) -> Result<String> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((collection.to_string(), document.clone()));
        if self.fail {
            Err(anyhow!("disk full"))
        } else {
            Ok("test-id".to_string())
        }
    }
}

#[derive(Default)]
struct MockNotifier {
    sends: AtomicUsize,
    fail: bool,
    last: Mutex<Option<String>>,
}

impl MockNotifier {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn send_count(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    fn last_message(&self) -> Option<String> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_enabled(&self) -> bool {
        true
    }

    async fn send(&self, text: &str) -> Result<()> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(text.to_string());
        if self.fail {
            Err(anyhow!("webhook unreachable"))
        } else {
            Ok(())
        }
    }
}

// ─── Test Harness ─────────────────────────────────────────────────────────────

struct TestApi {
    router: Router,
    store: Arc<MockStore>,
    notifier: Arc<MockNotifier>,
}

fn test_api_with(store: MockStore, notifier: MockNotifier) -> TestApi {
    let store = Arc::new(store);
    let notifier = Arc::new(notifier);
    let state = ApiState::with_adapters(Config::default(), store.clone(), notifier.clone());
    TestApi {
        router: build_router(state),
        store,
        notifier,
    }
}

fn test_api() -> TestApi {
    test_api_with(MockStore::default(), MockNotifier::default())
}

async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn valid_project_payload() -> Value {
    json!({
        "serviceType": "demo-to-production",
        "projectTitle": "Harden the beta",
        "projectDescription": "Move the prototype onto real infrastructure",
        "timeline": "1-month",
        "budget": "15k-50k",
        "name": "Avi",
        "email": "avi@example.com",
        "techExpertise": ["cloud", "performance"],
        "currentStack": {"Backend": ["Go"], "Cloud": ["AWS"]}
    })
}

// ─── Request Form Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_email_rejected_without_side_effects() {
    let api = test_api();
    let mut payload = valid_project_payload();
    payload.as_object_mut().unwrap().remove("email");

    let (status, body) = post_json(api.router, "/api/project-request", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Required fields are missing");
    assert_eq!(api.store.insert_count(), 0);
    assert_eq!(api.notifier.send_count(), 0);
}

#[tokio::test]
async fn test_invalid_email_rejected_without_side_effects() {
    let api = test_api();
    let mut payload = valid_project_payload();
    payload["email"] = json!("not-an-email");

    let (status, body) = post_json(api.router, "/api/project-request", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email address");
    assert_eq!(api.store.insert_count(), 0);
    assert_eq!(api.notifier.send_count(), 0);
}

#[tokio::test]
async fn test_valid_submission_persists_and_notifies() {
    let api = test_api();

    let (status, body) = post_json(api.router, "/api/project-request", &valid_project_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains("submitted"));

    assert_eq!(api.store.insert_count(), 1);
    let (collection, doc) = api.store.last_insert().unwrap();
    assert_eq!(collection, "project-requests");
    assert_eq!(doc["techExpertise"], json!(["cloud", "performance"]));
    assert_eq!(doc["currentStack"]["Cloud"], json!(["AWS"]));
    assert_eq!(doc["preferredContact"], "email");
    assert!(doc["submittedAt"].as_str().is_some());

    assert_eq!(api.notifier.send_count(), 1);
    let message = api.notifier.last_message().unwrap();
    assert!(message.contains("Demo to Production"));
    assert!(message.contains("$15,000 - $50,000"));
}

#[tokio::test]
async fn test_store_failure_still_returns_success_and_notifies() {
    let api = test_api_with(MockStore::failing(), MockNotifier::default());

    let (status, body) = post_json(api.router, "/api/project-request", &valid_project_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(api.store.insert_count(), 1);
    assert_eq!(api.notifier.send_count(), 1, "notification must still be attempted");
}

#[tokio::test]
async fn test_notifier_failure_still_returns_success_and_persists() {
    let api = test_api_with(MockStore::default(), MockNotifier::failing());

    let (status, body) = post_json(api.router, "/api/project-request", &valid_project_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(api.store.insert_count(), 1, "record must still be stored");
    assert!(api.store.last_insert().is_some());
    assert_eq!(api.notifier.send_count(), 1);
}

#[tokio::test]
async fn test_assignment_variant_uses_its_own_collection() {
    let api = test_api();
    let payload = json!({
        "assignmentType": "research-paper",
        "assignmentTitle": "Urban heat islands",
        "assignmentDescription": "Literature review with GIS component",
        "deadline": "1-2-weeks",
        "academicLevel": "masters",
        "name": "Shira",
        "email": "shira@example.edu"
    });

    let (status, body) = post_json(api.router, "/api/assignment-request", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("academic expert"));

    let (collection, doc) = api.store.last_insert().unwrap();
    assert_eq!(collection, "assignment-requests");
    assert_eq!(doc["urgencyLevel"], "standard");
    assert_eq!(doc["subjectArea"], "Not specified");

    let message = api.notifier.last_message().unwrap();
    assert!(message.contains("Research Paper"));
    assert!(message.contains("Master's"));
}

#[tokio::test]
async fn test_draft_payload_round_trips_through_backend() {
    let api = test_api();

    let mut draft = DraftRecord::new(project_request());
    draft.set("serviceType", "codebase-fix");
    draft.set("projectTitle", "Tame the test suite");
    draft.set("projectDescription", "Flaky CI blocks every release");
    draft.set("timeline", "asap");
    draft.set("budget", "1k-5k");
    draft.set("name", "Ella");
    draft.set("email", "ella@example.com");
    draft.toggle_expertise("security");
    draft.toggle_expertise("data");
    draft.toggle_expertise("security"); // toggled back off
    draft.toggle_stack("Database", "PostgreSQL");
    draft.toggle_stack("Database", "Redis");

    let (status, _) = post_json(api.router, "/api/project-request", &draft.to_payload()).await;
    assert_eq!(status, StatusCode::OK);

    let (_, doc) = api.store.last_insert().unwrap();
    assert_eq!(doc["techExpertise"], json!(["data"]));
    assert_eq!(doc["currentStack"]["Database"], json!(["PostgreSQL", "Redis"]));
    assert_eq!(doc["currentStack"].as_object().unwrap().len(), 1);
}

// ─── Contact Form Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_contact_requires_name_email_message() {
    let api = test_api();
    let payload = json!({"name": "Dor", "email": "dor@example.com"});

    let (status, body) = post_json(api.router, "/api/contact", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name, email, and message are required");
    assert_eq!(api.store.insert_count(), 0);
}

#[tokio::test]
async fn test_contact_accepted_and_stored() {
    let api = test_api();
    let payload = json!({
        "name": "Dor",
        "email": "dor@example.com",
        "service": "consulting",
        "message": "Can you review our architecture?",
        "company": "Initech"
    });

    let (status, body) = post_json(api.router, "/api/contact", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (collection, doc) = api.store.last_insert().unwrap();
    assert_eq!(collection, "contact-submissions");
    assert_eq!(doc["company"], "Initech");
    assert!(doc["submittedAt"].as_str().is_some());

    let message = api.notifier.last_message().unwrap();
    assert!(message.contains("New Contact Form Submission"));
}

#[tokio::test]
async fn test_contact_invalid_email() {
    let api = test_api();
    let payload = json!({
        "name": "Dor",
        "email": "dor at example dot com",
        "message": "hi"
    });

    let (status, body) = post_json(api.router, "/api/contact", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email address");
}
