//! Chatbot entry point.
//!
//! Wraps an [`IntentRouter`] and turns every outcome, including router
//! faults, into a [`ChatbotResult`]. Nothing past this boundary sees an error.

use std::sync::Arc;

use urban_intel_core::{
    traits::IntentRouter,
    types::{ChatbotResult, RouteRequest},
};

/// Boundary between callers (HTTP, CLI) and the router.
#[derive(Clone)]
pub struct ChatbotService {
    router: Arc<dyn IntentRouter>,
}

impl ChatbotService {
    pub fn new(router: Arc<dyn IntentRouter>) -> Self {
        Self { router }
    }

    /// Underlying router.
    pub fn router(&self) -> &Arc<dyn IntentRouter> {
        &self.router
    }

    /// Route a request and convert the outcome to the outward result shape.
    pub fn process(&self, request: &RouteRequest) -> ChatbotResult {
        match self.router.route(request) {
            Ok(response) => ChatbotResult::from(response),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    role = %request.role,
                    tenant = %request.tenant,
                    "Routing failed, returning error result"
                );
                ChatbotResult::failure(e)
            }
        }
    }

    /// Convenience form of [`process`](Self::process) with explicit context.
    pub fn process_query(&self, query: &str, role: &str, tenant: &str) -> ChatbotResult {
        self.process(
            &RouteRequest::text(query)
                .with_role(role)
                .with_tenant(tenant),
        )
    }
}
