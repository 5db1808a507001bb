//! Axum HTTP server for the web gateway.
//!
//! Builds the router, applies the shared middleware stack and spawns the
//! server task. Handlers live in [`super::handlers`].

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use eduai_guidance::UserProfile;
use tokio::sync::oneshot;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::channels::web::handlers::{
    chat::{chat_handler, chat_welcome_handler},
    courses::{courses_create_handler, courses_list_handler},
    dashboard::{dashboard_demo_handler, dashboard_profile_handler},
    login::login_handler,
};
use crate::channels::web::types::{ChatResponse, HealthResponse};
use crate::config::{Config, GatewayConfig};
use crate::db::{CourseStore, DemoCourseStore, InMemoryUserStore, UserStore};
use crate::error::ChannelError;
use crate::guidance::{FALLBACK_RESPONSE, GuidanceService};

/// Shared state for all gateway handlers.
pub struct GatewayState {
    pub guidance: GuidanceService,
    pub users: Arc<dyn UserStore>,
    pub courses: Arc<dyn CourseStore>,
    /// Profile rendered by `GET /api/dashboard`.
    pub demo_profile: UserProfile,
    /// Message sent with a 401 from `POST /api/auth/login`.
    pub login_failure_message: String,
    /// Shutdown signal sender.
    pub shutdown_tx: tokio::sync::RwLock<Option<oneshot::Sender<()>>>,
}

impl GatewayState {
    pub fn new(
        guidance: GuidanceService,
        users: Arc<dyn UserStore>,
        courses: Arc<dyn CourseStore>,
    ) -> Self {
        Self {
            guidance,
            users,
            courses,
            demo_profile: UserProfile::demo(),
            login_failure_message: "Invalid credentials".to_string(),
            shutdown_tx: tokio::sync::RwLock::new(None),
        }
    }

    /// State backed by the in-memory demo stores.
    pub fn demo(config: &Config, guidance: GuidanceService) -> Self {
        Self {
            login_failure_message: config.demo.login_failure_message(),
            ..Self::new(
                guidance,
                Arc::new(InMemoryUserStore::new(config.demo.clone())),
                Arc::new(DemoCourseStore),
            )
        }
    }

    /// Ask a running server to stop accepting connections.
    pub async fn shutdown(&self) {
        if let Some(tx) = self.shutdown_tx.write().await.take() {
            let _ = tx.send(());
        }
    }
}

/// Start the gateway and return the address it bound to.
///
/// Binding port 0 picks a free port, which the integration tests rely on.
pub async fn start_server(
    config: &GatewayConfig,
    state: Arc<GatewayState>,
) -> Result<SocketAddr, ChannelError> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        ChannelError::StartupFailed {
            name: "gateway".to_string(),
            reason: format!("Failed to bind to {}: {}", addr, e),
        }
    })?;
    let bound_addr = listener
        .local_addr()
        .map_err(|e| ChannelError::StartupFailed {
            name: "gateway".to_string(),
            reason: format!("Failed to get local addr: {}", e),
        })?;

    let app = router(state.clone(), bound_addr, config.max_body_bytes);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    *state.shutdown_tx.write().await = Some(shutdown_tx);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("Web gateway shutting down");
            })
            .await
        {
            tracing::error!("Web gateway server error: {}", e);
        }
    });

    tracing::info!("Web gateway listening on http://{}", bound_addr);
    Ok(bound_addr)
}

fn router(state: Arc<GatewayState>, bound_addr: SocketAddr, max_body_bytes: usize) -> Router {
    let public = Router::new().route("/api/health", get(health_handler));

    // A panic anywhere in the chat path still yields the fallback answer.
    let chat = Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/chat/welcome", post(chat_welcome_handler))
        .layer(CatchPanicLayer::custom(chat_panic_response));

    let api = Router::new()
        .route(
            "/api/dashboard",
            get(dashboard_demo_handler).post(dashboard_profile_handler),
        )
        .route(
            "/api/courses",
            get(courses_list_handler).post(courses_create_handler),
        )
        .route("/api/auth/login", post(login_handler));

    // CORS: same-origin by default, plus localhost on the bound port.
    let origins: Vec<HeaderValue> = [
        format!("http://{}:{}", bound_addr.ip(), bound_addr.port()),
        format!("http://localhost:{}", bound_addr.port()),
    ]
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE]));

    Router::new()
        .merge(public)
        .merge(chat)
        .merge(api)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn chat_panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!("Chat handler panicked: {}", detail);
    (
        StatusCode::OK,
        Json(ChatResponse {
            response: FALLBACK_RESPONSE.to_string(),
        }),
    )
        .into_response()
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "eduai",
    })
}
