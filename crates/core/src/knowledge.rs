//! Static city knowledge consulted by the intent handlers.
//!
//! The knowledge base is built once (from the bundled reference sample or a
//! YAML file) and is read-only afterwards. Handlers only see it through the
//! accessors below; no mutable container is ever handed out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::{Error, Result};

/// Placeholder replaced by the tenant id in page templates.
pub const TENANT_PLACEHOLDER: &str = "{tenant}";

/// A single housing listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    /// Area slug, e.g. "area-y".
    pub area: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Display price, e.g. "$2,800/month".
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Living {
    #[serde(default)]
    areas: Vec<String>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    listings: Vec<Listing>,
}

/// Current traffic conditions. Serialized verbatim as the traffic data blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficStatus {
    pub status: String,
    pub congestion_level: u32,
    #[serde(default)]
    pub hotspots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingStatus {
    pub availability: String,
    #[serde(default)]
    pub zones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Food {
    #[serde(default)]
    cuisines: Vec<String>,
    #[serde(default)]
    restaurants: Vec<String>,
}

/// Venue lists per city section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Venues {
    #[serde(default)]
    pub entertainment: Vec<String>,
    #[serde(default)]
    pub health: Vec<String>,
    #[serde(default)]
    pub sport: Vec<String>,
    #[serde(default)]
    pub community: Vec<String>,
}

/// Immutable in-memory table of city facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    living: Living,
    traffic: TrafficStatus,
    parking: ParkingStatus,
    #[serde(default)]
    events: Vec<String>,
    #[serde(default)]
    food: Food,
    #[serde(default)]
    venues: Venues,
    /// Destination name -> page template. Keys are lower-case with no whitespace.
    destinations: BTreeMap<String, String>,
}

impl KnowledgeBase {
    /// Parse and validate a knowledge base from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let kb: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::knowledge_load(format!("invalid YAML: {}", e)))?;
        kb.validate()?;
        Ok(kb)
    }

    /// Load a knowledge base from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::knowledge_load(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
    }

    /// Destination keys must already be in lookup form, otherwise they could never match.
    fn validate(&self) -> Result<()> {
        for key in self.destinations.keys() {
            if key.is_empty() || key.chars().any(char::is_whitespace) || key.to_lowercase() != *key {
                return Err(Error::knowledge_load(format!(
                    "destination key '{}' must be lower-case without whitespace",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Reference city data.
    pub fn sample() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let listing = |name: &str, area: &str, kind: &str, price: &str| Listing {
            name: name.into(),
            area: area.into(),
            kind: kind.into(),
            price: price.into(),
        };

        let destinations = [
            ("dashboard", "/urban/{tenant}/dashboard"),
            ("living", "/urban/{tenant}/living"),
            ("housing", "/urban/{tenant}/living"),
            ("apartments", "/urban/{tenant}/living"),
            ("events", "/urban/{tenant}/event"),
            ("food", "/urban/{tenant}/food"),
            ("restaurants", "/urban/{tenant}/food"),
            ("dining", "/urban/{tenant}/food"),
            ("entertainment", "/urban/{tenant}/entertainment"),
            ("health", "/urban/{tenant}/health"),
            ("medical", "/urban/{tenant}/health"),
            ("sports", "/urban/{tenant}/sport"),
            ("fitness", "/urban/{tenant}/sport"),
            ("community", "/urban/{tenant}/community"),
            ("wellness", "/urban/{tenant}/reflexing"),
            ("meditation", "/urban/{tenant}/reflexing"),
            ("networks", "/networks"),
        ]
        .into_iter()
        .map(|(name, page)| (name.to_string(), page.to_string()))
        .collect();

        Self {
            living: Living {
                areas: strings(&["area-y", "area-z", "area-x", "downtown", "tech-quarter", "green-district"]),
                types: strings(&["apartment", "condo", "house", "loft", "studio"]),
                listings: vec![
                    listing("Skyline Apartments", "area-y", "apartment", "$2,800/month"),
                    listing("Green Valley Condos", "area-z", "condo", "$2,200/month"),
                    listing("Tech Quarter Lofts", "area-x", "loft", "$3,200/month"),
                ],
            },
            traffic: TrafficStatus {
                status: "moderate".into(),
                congestion_level: 68,
                hotspots: strings(&["Highway 101", "Downtown Core", "Tech Quarter Bridge"]),
            },
            parking: ParkingStatus {
                availability: "34% occupied".into(),
                zones: strings(&["Downtown Core", "Shopping District", "Business Quarter"]),
            },
            events: strings(&["Tech Innovation Summit", "Urban Green Festival", "Cultural Heritage Night"]),
            food: Food {
                cuisines: strings(&["fusion", "japanese", "organic"]),
                restaurants: strings(&["Quantum Bistro", "Neon Noodle House", "Vertical Farm Cafe"]),
            },
            venues: Venues {
                entertainment: strings(&["Holographic Cinema", "Neon Arcade", "Sky Lounge"]),
                health: strings(&["Central Medical Complex", "Wellness Center", "Digital Pharmacy"]),
                sport: strings(&["Quantum Sports Complex", "Cyber Stadium", "Climbing Center"]),
                community: strings(&["Digital Community Center", "Makers' Collective", "Green Community Garden"]),
            },
            destinations,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn areas(&self) -> &[String] {
        &self.living.areas
    }

    pub fn housing_types(&self) -> &[String] {
        &self.living.types
    }

    pub fn listings(&self) -> &[Listing] {
        &self.living.listings
    }

    pub fn traffic(&self) -> &TrafficStatus {
        &self.traffic
    }

    pub fn parking(&self) -> &ParkingStatus {
        &self.parking
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn cuisines(&self) -> &[String] {
        &self.food.cuisines
    }

    pub fn restaurants(&self) -> &[String] {
        &self.food.restaurants
    }

    pub fn venues(&self) -> &Venues {
        &self.venues
    }

    /// Page for a destination key, with the tenant interpolated.
    ///
    /// The key is used as-is; callers normalize it first.
    pub fn page(&self, destination: &str, tenant: &str) -> Option<String> {
        self.destinations
            .get(destination)
            .map(|template| template.replace(TENANT_PLACEHOLDER, tenant))
    }

    /// Like [`page`](Self::page) but a missing destination is a fault.
    pub fn require_page(&self, destination: &str, tenant: &str) -> Result<String> {
        self.page(destination, tenant)
            .ok_or_else(|| Error::missing_knowledge(format!("destination '{}'", destination)))
    }

    /// Known destination keys, sorted.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.destinations.keys().map(String::as_str)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_interpolates_tenant() {
        let kb = KnowledgeBase::sample();
        assert_eq!(kb.page("living", "metro").as_deref(), Some("/urban/metro/living"));
        assert_eq!(kb.page("networks", "metro").as_deref(), Some("/networks"));
        assert_eq!(kb.page("atlantis", "metro"), None);
    }

    #[test]
    fn require_page_reports_missing_destination() {
        let kb = KnowledgeBase::sample();
        let err = kb.require_page("atlantis", "demo").unwrap_err();
        assert!(matches!(err, Error::MissingKnowledge(_)));
        assert!(err.to_string().contains("atlantis"));
    }

    #[test]
    fn yaml_with_bad_destination_key_is_rejected() {
        let yaml = r#"
traffic: { status: calm, congestion_level: 5 }
parking: { availability: "10% occupied" }
destinations:
  "Food Court": /urban/{tenant}/food
"#;
        let err = KnowledgeBase::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, Error::KnowledgeLoad(_)));
    }

    #[test]
    fn minimal_yaml_defaults_optional_sections() {
        let yaml = r#"
traffic: { status: calm, congestion_level: 5 }
parking: { availability: "10% occupied" }
destinations:
  food: /urban/{tenant}/food
"#;
        let kb = KnowledgeBase::from_yaml_str(yaml).unwrap();
        assert!(kb.listings().is_empty());
        assert!(kb.traffic().hotspots.is_empty());
        assert_eq!(kb.destinations().collect::<Vec<_>>(), vec!["food"]);
    }
}
