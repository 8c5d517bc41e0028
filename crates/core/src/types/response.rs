use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Response Types (Router Output)
// =============================================================================

/// Structured action the client should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Move the client to `page`, optionally opening `feature`.
    Navigate,
    /// Show the message, optionally with a `data` excerpt.
    Info,
    /// Reserved. No handler produces it yet.
    Search,
    /// Reserved. No handler produces it yet.
    Filter,
}

impl Action {
    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::Info => "info",
            Self::Search => "search",
            Self::Filter => "filter",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Router response. Built once by a handler and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    message: String,
    action: Action,
    page: Option<String>,
    feature: Option<String>,
    filter_params: Option<Map<String, Value>>,
    data: Option<Map<String, Value>>,
}

impl Response {
    /// Navigate response. Every navigation carries a page.
    pub fn navigate(message: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: Action::Navigate,
            page: Some(page.into()),
            feature: None,
            filter_params: None,
            data: None,
        }
    }

    /// Plain informational response.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: Action::Info,
            page: None,
            feature: None,
            filter_params: None,
            data: None,
        }
    }

    /// Attach a feature flag within the target page.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Attach a single filter parameter, creating the map on first use.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter_params
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attach a knowledge-base excerpt.
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    pub fn filter_params(&self) -> Option<&Map<String, Value>> {
        self.filter_params.as_ref()
    }

    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }
}
