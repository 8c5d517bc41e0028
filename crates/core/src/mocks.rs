//! Mock implementations of core traits for testing.
//!
//! Used by the gateway's service and server tests to exercise the error
//! boundary without depending on the rule-based router.

use std::sync::Mutex;

use crate::{
    traits::IntentRouter,
    types::{IntentMatch, Response, RouteRequest},
    Error, Result,
};

// =============================================================================
// Mock Router
// =============================================================================

enum Script {
    Respond(Response),
    Fail(String),
}

/// Router that returns a fixed response (or fault) for every request.
pub struct MockRouter {
    script: Script,
    intent: Option<IntentMatch>,
    requests: Mutex<Vec<RouteRequest>>,
}

impl MockRouter {
    /// Create a router that always answers with `response`.
    pub fn new(response: Response) -> Self {
        Self {
            script: Script::Respond(response),
            intent: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a router whose handlers always fault with an internal error.
    pub fn failing(reason: &str) -> Self {
        Self {
            script: Script::Fail(reason.to_string()),
            intent: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Report `intent` from `classify`.
    pub fn with_intent(mut self, intent: IntentMatch) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Requests seen by `route`, in call order.
    pub fn requests(&self) -> Vec<RouteRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl IntentRouter for MockRouter {
    fn classify(&self, _utterance: &str) -> Option<IntentMatch> {
        self.intent.clone()
    }

    fn route(&self, request: &RouteRequest) -> Result<Response> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Respond(response) => Ok(response.clone()),
            Script::Fail(reason) => Err(Error::internal(reason.clone())),
        }
    }
}
