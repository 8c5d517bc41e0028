//! Gateway traits.

use crate::error::Result;
use crate::types::{IntentMatch, Response, RouteRequest};

/// Maps an utterance plus caller context to a structured response.
///
/// Implementations are stateless across calls: identical requests yield
/// identical responses, so a router can be shared freely behind an `Arc`.
pub trait IntentRouter: Send + Sync {
    /// Scan the pattern table without synthesizing a response.
    ///
    /// `None` means the fallback help response would be produced.
    fn classify(&self, utterance: &str) -> Option<IntentMatch>;

    /// Route a request to exactly one handler and return its response.
    fn route(&self, request: &RouteRequest) -> Result<Response>;
}
