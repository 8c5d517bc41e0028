//! Axum-based HTTP server for the gateway.

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use urban_intel_core::{
    traits::IntentRouter,
    types::{ChatbotResult, IntentCategory, RouteRequest, DEFAULT_ROLE, DEFAULT_TENANT},
    Error, Result,
};

use crate::service::ChatbotService;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Enable CORS.
    pub enable_cors: bool,
    /// Role used when a request omits `userRole`.
    pub default_role: String,
    /// Tenant used when a request omits `urbanId`.
    pub default_tenant: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
            default_role: DEFAULT_ROLE.to_string(),
            default_tenant: DEFAULT_TENANT.to_string(),
        }
    }
}

/// Shared application state.
pub struct AppState {
    pub service: ChatbotService,
    pub default_role: String,
    pub default_tenant: String,
}

/// Gateway server.
pub struct GatewayServer {
    config: GatewayConfig,
    state: Arc<AppState>,
}

impl GatewayServer {
    /// Create a new gateway server.
    pub fn new(config: GatewayConfig, service: ChatbotService) -> Self {
        let state = Arc::new(AppState {
            service,
            default_role: config.default_role.clone(),
            default_tenant: config.default_tenant.clone(),
        });
        Self { config, state }
    }

    /// Build the Axum router.
    pub fn build_router(&self) -> Router {
        let mut router = Router::new()
            .route("/health", get(health_handler))
            .route("/api/chatbot", post(chatbot_handler))
            .route("/v1/intent", post(intent_handler))
            .with_state(self.state.clone());

        if self.config.enable_cors {
            router = router.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Run the server.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::gateway(format!("Failed to bind: {}", e)))?;

        tracing::info!(addr = %addr, "Gateway server starting");

        axum::serve(listener, self.build_router())
            .await
            .map_err(|e| Error::gateway(format!("Server error: {}", e)))?;

        Ok(())
    }
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Chatbot request, as sent by the web client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotRequest {
    /// Free-text query.
    pub query: Option<String>,
    /// Caller role.
    pub user_role: Option<String>,
    /// Tenant (city) identifier.
    pub urban_id: Option<String>,
}

/// Rejection body for requests without a query.
#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub success: bool,
    pub message: String,
}

/// Intent-only request.
#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    /// Message to classify.
    pub message: String,
}

/// Intent response.
#[derive(Debug, Serialize)]
pub struct IntentResponse {
    /// Trace ID.
    pub trace_id: String,
    /// Matched category, or `null` when the fallback would answer.
    pub intent: Option<IntentCategory>,
    /// Captured parameter.
    pub parameter: Option<String>,
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check handler.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Chatbot handler.
async fn chatbot_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ChatbotRequest>, JsonRejection>,
) -> axum::response::Response {
    let trace_id = Uuid::new_v4().to_string();

    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(trace_id = %trace_id, error = %rejection, "Malformed chatbot request");
            return (StatusCode::BAD_REQUEST, Json(ChatbotResult::failure(rejection.body_text())))
                .into_response();
        }
    };

    let query = match payload.query {
        Some(query) if !query.trim().is_empty() => query,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(RejectionResponse {
                    success: false,
                    message: "Query is required".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Empty or blank role and tenant fall back to the defaults, like absent ones.
    let role = payload
        .user_role
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| state.default_role.clone());
    let tenant = payload
        .urban_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| state.default_tenant.clone());

    let request = RouteRequest::text(query).with_role(role).with_tenant(tenant);

    tracing::info!(
        trace_id = %trace_id,
        query_len = request.utterance.len(),
        role = %request.role,
        tenant = %request.tenant,
        "Processing chatbot request"
    );

    let result = state.service.process(&request);

    tracing::debug!(
        trace_id = %trace_id,
        success = result.success,
        action = %result.action,
        page = ?result.page,
        "Chatbot request handled"
    );

    (StatusCode::OK, Json(result)).into_response()
}

/// Intent classification handler (for debugging/testing).
async fn intent_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<IntentRequest>,
) -> impl IntoResponse {
    let trace_id = Uuid::new_v4().to_string();
    let intent = state.service.router().classify(&payload.message);

    Json(IntentResponse {
        trace_id,
        intent: intent.as_ref().map(|m| m.category),
        parameter: intent.and_then(|m| m.parameter),
    })
}
