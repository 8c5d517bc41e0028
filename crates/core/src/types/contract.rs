use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::response::{Action, Response};

/// Outward-facing result returned by the chatbot entry point.
///
/// Absent optional fields serialize as `null` so clients always see the
/// same set of keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatbotResult {
    pub success: bool,
    pub message: String,
    pub action: Action,
    pub page: Option<String>,
    pub feature: Option<String>,
    pub filter_params: Option<Map<String, Value>>,
    pub data: Option<Map<String, Value>>,
}

impl ChatbotResult {
    /// Failure shape: an apology carrying the fault description.
    pub fn failure(reason: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!(
                "I encountered an error processing your request: {}. Please try again.",
                reason
            ),
            action: Action::Info,
            page: None,
            feature: None,
            filter_params: None,
            data: None,
        }
    }
}

impl From<Response> for ChatbotResult {
    fn from(response: Response) -> Self {
        Self {
            success: true,
            message: response.message().to_string(),
            action: response.action(),
            page: response.page().map(str::to_string),
            feature: response.feature().map(str::to_string),
            filter_params: response.filter_params().cloned(),
            data: response.data().cloned(),
        }
    }
}
