//! End-to-end tests for the web gateway over a real socket.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use eduai::channels::web::{GatewayState, start_server};
use eduai::config::{Config, DemoConfig, GatewayConfig};
use secrecy::SecretString;
use eduai::error::LlmError;
use eduai::guidance::{FALLBACK_RESPONSE, GuidanceService};
use eduai::llm::{GenerationRequest, TextGenerator};

struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    fn name(&self) -> &str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-model"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError> {
        Ok(format!("Generated advice of {} tokens max.", request.max_length))
    }
}

struct PanickingGenerator;

#[async_trait]
impl TextGenerator for PanickingGenerator {
    fn name(&self) -> &str {
        "panicking"
    }

    fn model_name(&self) -> &str {
        "panicking-model"
    }

    async fn generate(&self, _request: GenerationRequest) -> Result<String, LlmError> {
        panic!("generator exploded");
    }
}

fn test_config() -> Config {
    Config {
        gateway: GatewayConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            ..GatewayConfig::default()
        },
        llm: Default::default(),
        demo: Default::default(),
    }
}

async fn start(guidance: GuidanceService) -> (SocketAddr, Arc<GatewayState>) {
    start_with(test_config(), guidance).await
}

async fn start_with(config: Config, guidance: GuidanceService) -> (SocketAddr, Arc<GatewayState>) {
    let state = Arc::new(GatewayState::demo(&config, guidance));
    let addr = start_server(&config.gateway, state.clone())
        .await
        .expect("Failed to start test server");
    (addr, state)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}

async fn post_json(addr: SocketAddr, path: &str, body: Value) -> (u16, Value) {
    let resp = client()
        .post(format!("http://{addr}{path}"))
        .json(&body)
        .send()
        .await
        .expect("request failed");
    let status = resp.status().as_u16();
    (status, resp.json().await.expect("json body"))
}

async fn post_raw(addr: SocketAddr, path: &str, body: &str) -> (u16, Value) {
    let resp = client()
        .post(format!("http://{addr}{path}"))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .expect("request failed");
    let status = resp.status().as_u16();
    (status, resp.json().await.expect("json body"))
}

async fn get_json(addr: SocketAddr, path: &str) -> (u16, Value) {
    let resp = client()
        .get(format!("http://{addr}{path}"))
        .send()
        .await
        .expect("request failed");
    let status = resp.status().as_u16();
    (status, resp.json().await.expect("json body"))
}

fn ann() -> Value {
    json!({
        "name": "Ann",
        "degree": "Computer Science",
        "qualifications": "BSc",
        "experience": "1 year",
        "careerGoals": "AI/ML Engineer"
    })
}

#[tokio::test]
async fn health_reports_service() {
    let (addr, state) = start(GuidanceService::templated()).await;

    let resp = client()
        .get(format!("http://{addr}/api/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"status": "healthy", "service": "eduai"}));

    state.shutdown().await;
}

#[tokio::test]
async fn chat_requires_message() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = post_json(addr, "/api/chat", json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Message is required"}));

    let (status, _) = post_json(addr, "/api/chat", json!({"message": ""})).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn malformed_chat_body_gets_fallback() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = post_raw(addr, "/api/chat", "{not json").await;
    assert_eq!(status, 200);
    assert_eq!(body["response"], FALLBACK_RESPONSE);
}

#[tokio::test]
async fn chat_personalizes_roadmap() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = post_json(
        addr,
        "/api/chat",
        json!({"message": "What's my ROADMAP?", "userProfile": ann()}),
    )
    .await;
    assert_eq!(status, 200);
    let response = body["response"].as_str().unwrap();
    assert!(response.contains("Ann"));
    assert!(response.contains("Computer Science"));
    assert!(response.contains("AI/ML Engineer"));
}

#[tokio::test]
async fn chat_without_profile_is_generic() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = post_json(addr, "/api/chat", json!({"message": "hello"})).await;
    assert_eq!(status, 200);
    assert!(!body["response"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn chat_prepends_generated_text() {
    let (addr, _state) = start(GuidanceService::new(Some(Arc::new(EchoGenerator)))).await;

    let (_, body) = post_json(addr, "/api/chat", json!({"message": "career help"})).await;
    let response = body["response"].as_str().unwrap();
    assert!(response.starts_with("Generated advice of 300 tokens max.\n\n"));
}

#[tokio::test]
async fn chat_panic_gets_fallback() {
    let (addr, _state) = start(GuidanceService::new(Some(Arc::new(PanickingGenerator)))).await;

    let (status, body) = post_json(addr, "/api/chat", json!({"message": "career help"})).await;
    assert_eq!(status, 200);
    assert_eq!(body["response"], FALLBACK_RESPONSE);
}

#[tokio::test]
async fn welcome_with_and_without_profile() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = post_json(addr, "/api/chat/welcome", json!({"userProfile": ann()})).await;
    assert_eq!(status, 200);
    assert!(body["greeting"].as_str().unwrap().contains("Ann"));
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);

    let (status, body) = post_raw(addr, "/api/chat/welcome", "").await;
    assert_eq!(status, 200);
    assert!(!body["greeting"].as_str().unwrap().contains("Ann"));
}

#[tokio::test]
async fn login_accepts_demo_account() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = post_json(
        addr,
        "/api/auth/login",
        json!({"email": "demo@eduai.com", "password": "demo123"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "user": {"id": "1", "name": "John Student", "email": "demo@eduai.com"},
            "message": "Login successful"
        })
    );
}

#[tokio::test]
async fn login_rejects_other_credentials() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = post_json(
        addr,
        "/api/auth/login",
        json!({"email": "demo@eduai.com", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, 401);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Invalid credentials. Use demo@eduai.com / demo123"
    );

    let (status, _) = post_json(addr, "/api/auth/login", json!({})).await;
    assert_eq!(status, 401);

    let (status, body) = post_raw(addr, "/api/auth/login", "garbage").await;
    assert_eq!(status, 500);
    assert_eq!(body["message"], "Login failed");
}

#[tokio::test]
async fn configured_account_changes_login_hint() {
    let mut config = test_config();
    config.demo = DemoConfig {
        email: "ada@example.com".to_string(),
        password: SecretString::from("hunter2".to_string()),
        ..DemoConfig::default()
    };
    let (addr, _state) = start_with(config, GuidanceService::templated()).await;

    let (status, body) = post_json(
        addr,
        "/api/auth/login",
        json!({"email": "ada@example.com", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, 401);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid credentials"));
    assert!(message.contains("ada@example.com"));
    assert!(!message.contains("demo@eduai.com / demo123"));

    // The stock pair is no longer accepted, so it must not be advertised.
    let (status, _) = post_json(
        addr,
        "/api/auth/login",
        json!({"email": "demo@eduai.com", "password": "demo123"}),
    )
    .await;
    assert_eq!(status, 401);

    let (status, body) = post_json(
        addr,
        "/api/auth/login",
        json!({"email": "ada@example.com", "password": "hunter2"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["user"]["email"], "ada@example.com");
}

#[tokio::test]
async fn courses_list_is_static() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let created = json!({
        "title": "Rust Systems Programming",
        "description": "Ownership, lifetimes and async",
        "difficulty": "Advanced",
        "category": "Programming",
        "estimatedTime": "5 weeks",
        "lessons": 20
    });
    let (status, body) = post_json(addr, "/api/courses", created).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Course created successfully");
    assert_eq!(body["course"]["title"], "Rust Systems Programming");
    assert!(body["course"]["createdAt"].is_string());

    let (status, body) = get_json(addr, "/api/courses").await;
    assert_eq!(status, 200);
    let courses = body["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0]["title"], "Introduction to Machine Learning");
    assert_eq!(courses[2]["completedLessons"], 27);
}

#[tokio::test]
async fn course_create_errors() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = post_raw(addr, "/api/courses", "{").await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Failed to create course"}));

    let (status, body) = post_json(
        addr,
        "/api/courses",
        json!({
            "title": " ",
            "description": "d",
            "difficulty": "Beginner",
            "category": "c",
            "estimatedTime": "1 week",
            "lessons": 1
        }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("title is required"));
}

#[tokio::test]
async fn dashboard_demo_and_submitted_profile() {
    let (addr, _state) = start(GuidanceService::templated()).await;

    let (status, body) = get_json(addr, "/api/dashboard").await;
    assert_eq!(status, 200);
    assert_eq!(body["profile"]["name"], "John Student");
    assert_eq!(body["recommendations"][0]["field"], "Computer Science");

    let (status, body) = post_json(
        addr,
        "/api/dashboard",
        json!({
            "name": "Bo",
            "degree": "Business Administration",
            "qualifications": "",
            "experience": "none",
            "careerGoals": "Product Manager"
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["recommendations"][0]["field"], "Business");
    assert_eq!(body["profile"]["name"], "Bo");

    let (status, _) = post_raw(addr, "/api/dashboard", "[]").await;
    assert_eq!(status, 400);
}
