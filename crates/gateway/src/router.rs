//! Rule-based intent router.
//!
//! Categories are scanned in [`IntentCategory::ALL`] order and, within a
//! category, patterns in declaration order. The first regex that finds a
//! match anywhere in the normalized utterance wins; its first capture group
//! becomes the handler parameter.

use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

use urban_intel_core::{
    traits::IntentRouter,
    types::{IntentCategory, IntentMatch, Response, RouteRequest},
    Error, KnowledgeBase, Result,
};

use crate::handlers::{self, HandlerContext};

const LIVING_PATTERNS: &[&str] = &[
    r"apartments?\s+(?:near|in|at)\s+(\w+(?:\s+\w+)*)",
    r"housing?\s+(?:near|in|at)\s+(\w+(?:\s+\w+)*)",
    r"(?:find|show|search)\s+(?:apartments?|housing?|living)",
    r"where\s+(?:can\s+i\s+)?live\s+(?:near|in)\s+(\w+(?:\s+\w+)*)",
];

const TRAFFIC_PATTERNS: &[&str] = &[
    r"traffic\s+(?:status|condition|situation)",
    r"how\s+is\s+(?:the\s+)?traffic",
    r"congestion\s+(?:level|status)",
    r"road\s+conditions?",
];

const PARKING_PATTERNS: &[&str] = &[
    r"parking\s+(?:availability|spaces?|spots?)",
    r"where\s+(?:can\s+i\s+)?park",
    r"find\s+parking",
    r"parking\s+(?:near|in|at)\s+(\w+(?:\s+\w+)*)",
];

const EVENTS_PATTERNS: &[&str] = &[
    r"events?\s+(?:today|tomorrow|upcoming|this\s+week)",
    r"what\s+(?:events?|activities)\s+are\s+(?:happening|available)",
    r"show\s+(?:me\s+)?events?",
];

const FOOD_PATTERNS: &[&str] = &[
    r"restaurants?\s+(?:near|in|at)\s+(\w+(?:\s+\w+)*)",
    r"(?:find|show)\s+(?:food|restaurants?|dining)",
    r"where\s+(?:can\s+i\s+)?eat",
    r"(\w+)\s+(?:food|cuisine|restaurants?)",
];

const NAVIGATION_PATTERNS: &[&str] = &[
    r"go\s+to\s+(\w+(?:\s+\w+)*)",
    r"navigate\s+to\s+(\w+(?:\s+\w+)*)",
    r"show\s+(?:me\s+)?(?:the\s+)?(\w+)\s+page",
    r"open\s+(\w+(?:\s+\w+)*)",
];

/// Built-in patterns for a category, in match order.
pub fn builtin_patterns(category: IntentCategory) -> &'static [&'static str] {
    match category {
        IntentCategory::LivingSearch => LIVING_PATTERNS,
        IntentCategory::TrafficQuery => TRAFFIC_PATTERNS,
        IntentCategory::ParkingQuery => PARKING_PATTERNS,
        IntentCategory::EventsQuery => EVENTS_PATTERNS,
        IntentCategory::FoodQuery => FOOD_PATTERNS,
        IntentCategory::Navigation => NAVIGATION_PATTERNS,
    }
}

/// One row of the pattern table.
#[derive(Debug)]
struct IntentRule {
    category: IntentCategory,
    patterns: Vec<Regex>,
}

/// Router over the fixed, ordered category table.
///
/// The table and the knowledge base are frozen at construction, so a single
/// router can serve concurrent callers without locking.
pub struct RuleRouter {
    rules: Vec<IntentRule>,
    knowledge: Arc<KnowledgeBase>,
}

impl std::fmt::Debug for RuleRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRouter")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl RuleRouter {
    /// Create a router with the built-in patterns only.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Result<Self> {
        Self::builder(knowledge).build()
    }

    /// Start building a router with extra patterns.
    pub fn builder(knowledge: Arc<KnowledgeBase>) -> RuleRouterBuilder {
        RuleRouterBuilder::new(knowledge)
    }

    /// Knowledge base consulted by the handlers.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    fn scan(&self, normalized: &str) -> Option<IntentMatch> {
        for rule in &self.rules {
            for pattern in &rule.patterns {
                if let Some(captures) = pattern.captures(normalized) {
                    return Some(IntentMatch {
                        category: rule.category,
                        parameter: captures.get(1).map(|m| m.as_str().to_string()),
                    });
                }
            }
        }
        None
    }
}

impl IntentRouter for RuleRouter {
    fn classify(&self, utterance: &str) -> Option<IntentMatch> {
        self.scan(&utterance.trim().to_lowercase())
    }

    fn route(&self, request: &RouteRequest) -> Result<Response> {
        let ctx = HandlerContext {
            knowledge: &self.knowledge,
            role: &request.role,
            tenant: &request.tenant,
        };

        match self.scan(&request.normalized()) {
            Some(intent) => {
                tracing::debug!(
                    category = %intent.category,
                    parameter = ?intent.parameter,
                    role = %request.role,
                    "Intent matched"
                );
                handlers::handle(intent.category, intent.parameter.as_deref(), &ctx)
            }
            None => {
                tracing::debug!("No intent matched, using fallback");
                Ok(handlers::fallback())
            }
        }
    }
}

/// Builder for [`RuleRouter`].
#[derive(Debug)]
pub struct RuleRouterBuilder {
    knowledge: Arc<KnowledgeBase>,
    extra: Vec<(IntentCategory, String)>,
}

impl RuleRouterBuilder {
    /// Create a builder with no extra patterns.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            extra: Vec::new(),
        }
    }

    /// Append a pattern to a category; it is tried after the built-in ones.
    pub fn with_pattern(mut self, category: IntentCategory, pattern: impl Into<String>) -> Self {
        self.extra.push((category, pattern.into()));
        self
    }

    /// Append patterns keyed by category name, as found in configuration.
    pub fn with_named_patterns(mut self, patterns: &HashMap<String, Vec<String>>) -> Result<Self> {
        // Sort keys so the resulting table does not depend on map iteration order.
        let mut names: Vec<&String> = patterns.keys().collect();
        names.sort();

        for name in names {
            let category = IntentCategory::from_name(name)
                .ok_or_else(|| Error::UnknownCategory(name.clone()))?;
            for pattern in &patterns[name] {
                self.extra.push((category, pattern.clone()));
            }
        }
        Ok(self)
    }

    /// Compile the table.
    pub fn build(self) -> Result<RuleRouter> {
        let mut rules = Vec::with_capacity(IntentCategory::ALL.len());

        for category in IntentCategory::ALL {
            let mut patterns = builtin_patterns(category)
                .iter()
                .map(|p| Regex::new(p))
                .collect::<std::result::Result<Vec<_>, _>>()?;

            for (_, pattern) in self.extra.iter().filter(|(c, _)| *c == category) {
                patterns.push(Regex::new(pattern)?);
            }

            rules.push(IntentRule { category, patterns });
        }

        tracing::debug!(
            categories = rules.len(),
            extra_patterns = self.extra.len(),
            "Intent table compiled"
        );

        Ok(RuleRouter {
            rules,
            knowledge: self.knowledge,
        })
    }
}
