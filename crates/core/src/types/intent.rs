use serde::{Deserialize, Serialize};

// =============================================================================
// Intent Types
// =============================================================================

/// Intent categories, declared in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    /// Housing and apartment search.
    LivingSearch,
    /// Traffic status and congestion.
    TrafficQuery,
    /// Parking availability.
    ParkingQuery,
    /// Upcoming events.
    EventsQuery,
    /// Restaurants and cuisine.
    FoodQuery,
    /// Direct "go to X" navigation.
    Navigation,
}

impl IntentCategory {
    /// Every category in the order the router scans them.
    ///
    /// Food must stay ahead of navigation so that "restaurants near downtown"
    /// never reaches the generic navigation patterns.
    pub const ALL: [IntentCategory; 6] = [
        Self::LivingSearch,
        Self::TrafficQuery,
        Self::ParkingQuery,
        Self::EventsQuery,
        Self::FoodQuery,
        Self::Navigation,
    ];

    /// Stable category key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LivingSearch => "living_search",
            Self::TrafficQuery => "traffic_query",
            Self::ParkingQuery => "parking_query",
            Self::EventsQuery => "events_query",
            Self::FoodQuery => "food_query",
            Self::Navigation => "navigation",
        }
    }

    /// Parse a category key (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of scanning an utterance against the pattern table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentMatch {
    /// Category whose pattern matched first.
    pub category: IntentCategory,
    /// Capture group 1 of the matching pattern, if it has one.
    pub parameter: Option<String>,
}
