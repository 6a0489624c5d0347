//! Spendwise Web Server
//!
//! Axum-based UI and JSON API for the expense advisor. Serves the single
//! advisor page with its embedded assets plus two API routes: one
//! submission endpoint and one health endpoint.
//!
//! Security posture:
//! - Restrictive CORS policy (same-origin by default)
//! - Security headers (CSP restricts scripts to same-origin)
//! - Sanitized error responses (internals are logged, not returned)

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use spendwise_core::{ExpenseAdvisor, GenerationBackend, REMEDIATION_HINT};

mod handlers;


/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
///
/// The advisor (and the credential inside it) is the only process-wide
/// value; it is read-only after construction, so concurrent submissions
/// need no coordination.
pub struct AppState {
    pub advisor: ExpenseAdvisor,
}

/// Create the application router
pub fn create_router(advisor: ExpenseAdvisor, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { advisor });

    let api_routes = Router::new()
        .route("/advise", post(handlers::advise))
        .route("/health", get(handlers::health));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    // Security headers
    // CSP: scripts and styles stay same-origin; the page ships its own
    // Markdown renderer instead of pulling one from a CDN
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self'; img-src 'self'; connect-src 'self'; frame-ancestors 'none'",
    );

    Router::new()
        .route("/", get(index))
        .route("/app.js", get(app_js))
        .route("/style.css", get(style_css))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ))
}

/// The advisor page
async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("../assets/app.js"),
    )
}

async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../assets/style.css"),
    )
}

/// Start the server
pub async fn serve(
    advisor: ExpenseAdvisor,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    check_backend(&advisor).await;

    let app = create_router(advisor, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Check and log generation backend reachability at startup
async fn check_backend(advisor: &ExpenseAdvisor) {
    let client = advisor.client();
    if client.health_check().await {
        info!(
            "✅ Generation backend reachable: {} (model: {})",
            client.host(),
            client.model()
        );
    } else {
        warn!(
            "⚠️  Generation backend not responding: {} (model: {})",
            client.host(),
            client.model()
        );
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
///
/// Each spendwise-core error variant maps to one status and one `kind`
/// string the page switches on; service errors carry the static
/// remediation hint.
pub struct AppError {
    status: StatusCode,
    kind: &'static str,
    message: String,
    hint: Option<&'static str>,
}

impl AppError {
    pub fn validation(msg: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            kind: "validation",
            message: msg.to_string(),
            hint: None,
        }
    }

    pub fn service(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            kind: "service",
            message: msg.to_string(),
            hint: Some(REMEDIATION_HINT),
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: "internal",
            message: msg.to_string(),
            hint: None,
        }
    }
}

impl From<spendwise_core::Error> for AppError {
    fn from(err: spendwise_core::Error) -> Self {
        use spendwise_core::Error;

        match err {
            Error::Validation(msg) => Self::validation(&msg),
            Error::Service(msg) => Self::service(&msg),
            Error::Http(e) => Self::service(&e.to_string()),
            Error::Config(msg) => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                kind: "config",
                message: msg,
                hint: None,
            },
            other => {
                error!(error = %other, "Internal error");
                Self::internal("An internal error occurred")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message,
            "kind": self.kind,
            "hint": self.hint,
        }));

        (self.status, body).into_response()
    }
}
