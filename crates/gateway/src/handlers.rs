//! Per-intent response synthesis.
//!
//! Every handler is a pure function of the knowledge base, the captured
//! parameter and the caller context. Parameter normalization differs per
//! handler and is part of each handler's contract:
//!
//! - living: lower-case, spaces become hyphens (`"Area Y"` -> `"area-y"`)
//! - navigation: lower-case, all whitespace removed (`"Dash Board"` -> `"dashboard"`)
//! - parking, food: the parameter is only echoed in the message and never
//!   filters the listed zones or restaurants

use serde_json::Value;

use urban_intel_core::{
    knowledge::Listing,
    types::{IntentCategory, Response},
    Error, KnowledgeBase, Result, DEVELOPER_ROLE,
};

/// Destination keys of the city sections the handlers navigate to.
const LIVING_PAGE: &str = "living";
const DASHBOARD_PAGE: &str = "dashboard";
const EVENTS_PAGE: &str = "events";
const FOOD_PAGE: &str = "food";

/// Fixed help text returned when nothing matches.
pub const HELP_MESSAGE: &str = concat!(
    "I'm your urban intelligence assistant! I can help you with:\n",
    "\n",
    "🏠 **Housing**: \"apartments near area Y\", \"find housing\"\n",
    "🚗 **Traffic**: \"traffic status\", \"road conditions\"  \n",
    "🅿️ **Parking**: \"parking availability\", \"find parking\"\n",
    "📅 **Events**: \"upcoming events\", \"what's happening\"\n",
    "🍽️ **Food**: \"restaurants near downtown\", \"japanese food\"\n",
    "🎯 **Navigation**: \"go to dashboard\", \"show events page\"\n",
    "\n",
    "I can also navigate you directly to different sections of the city system. ",
    "What would you like to know about?",
);

/// Read-only inputs shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub knowledge: &'a KnowledgeBase,
    pub role: &'a str,
    pub tenant: &'a str,
}

impl HandlerContext<'_> {
    fn page(&self, destination: &str) -> Result<String> {
        self.knowledge.require_page(destination, self.tenant)
    }

    fn is_developer(&self) -> bool {
        self.role == DEVELOPER_ROLE
    }
}

/// Dispatch to the handler of `category`.
pub fn handle(
    category: IntentCategory,
    parameter: Option<&str>,
    ctx: &HandlerContext<'_>,
) -> Result<Response> {
    match category {
        IntentCategory::LivingSearch => living(parameter, ctx),
        IntentCategory::TrafficQuery => traffic(ctx),
        IntentCategory::ParkingQuery => parking(parameter, ctx),
        IntentCategory::EventsQuery => events(ctx),
        IntentCategory::FoodQuery => food(parameter, ctx),
        IntentCategory::Navigation => navigation(parameter.unwrap_or_default(), ctx),
    }
}

/// Help response. Ignores role and tenant.
pub fn fallback() -> Response {
    Response::info(HELP_MESSAGE)
}

/// Area slug used both for filtering and for `filter_params`.
pub fn normalize_area(area: &str) -> String {
    area.to_lowercase().replace(' ', "-")
}

/// Destination lookup key.
pub fn normalize_destination(destination: &str) -> String {
    destination
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn living(area: Option<&str>, ctx: &HandlerContext<'_>) -> Result<Response> {
    let page = ctx.page(LIVING_PAGE)?;

    let Some(area) = area else {
        return Ok(Response::navigate(
            "I'll show you all available housing options in the city.",
            page,
        ));
    };

    let lowered = area.to_lowercase();
    let normalized = normalize_area(area);

    // Both checks are needed: "area y" only hits "area-y" through the hyphenated form.
    let matches: Vec<&Listing> = ctx
        .knowledge
        .listings()
        .iter()
        .filter(|listing| {
            let listing_area = listing.area.to_lowercase();
            listing_area.contains(&normalized) || listing_area.contains(&lowered)
        })
        .collect();

    let message = if matches.is_empty() {
        format!(
            "I'm searching for apartments near {}. Let me take you to the living page to explore all available options.",
            area
        )
    } else {
        let listed = matches
            .iter()
            .map(|listing| format!("{} ({})", listing.name, listing.price))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "I found {} apartments near {}: {}. Let me show you the living page with detailed information.",
            matches.len(),
            area,
            listed
        )
    };

    Ok(Response::navigate(message, page).with_filter("area", normalized))
}

fn traffic(ctx: &HandlerContext<'_>) -> Result<Response> {
    let traffic = ctx.knowledge.traffic();

    let mut message = format!(
        "Current traffic status is {} with {}% congestion level. ",
        traffic.status, traffic.congestion_level
    );
    if !traffic.hotspots.is_empty() {
        message.push_str(&format!(
            "Main congestion areas: {}. ",
            traffic.hotspots.join(", ")
        ));
    }

    if ctx.is_developer() {
        message.push_str("I can show you the detailed traffic analysis dashboard.");
        return Ok(Response::navigate(message, ctx.page(DASHBOARD_PAGE)?).with_feature("traffic-analysis"));
    }

    message.push_str("Would you like to see the urban view for more details?");
    let data = match serde_json::to_value(traffic)? {
        Value::Object(map) => map,
        other => {
            return Err(Error::internal(format!(
                "traffic status serialized to {} instead of a mapping",
                other
            )))
        }
    };
    Ok(Response::info(message).with_data(data))
}

fn parking(area: Option<&str>, ctx: &HandlerContext<'_>) -> Result<Response> {
    let parking = ctx.knowledge.parking();

    let mut message = match area {
        Some(area) => format!(
            "Checking parking availability near {}. Current city-wide availability: {}. ",
            area, parking.availability
        ),
        None => format!("Current parking availability: {}. ", parking.availability),
    };
    // The area is informational only; zones are always the full city list.
    message.push_str(&format!("Available zones: {}. ", parking.zones.join(", ")));

    let page = ctx.page(DASHBOARD_PAGE)?;
    if ctx.is_developer() {
        message.push_str("I can show you the detailed parking analysis dashboard.");
        Ok(Response::navigate(message, page).with_feature("parking-analysis"))
    } else {
        message.push_str("Let me show you the urban view for real-time parking information.");
        Ok(Response::navigate(message, page).with_feature("urban-view"))
    }
}

fn events(ctx: &HandlerContext<'_>) -> Result<Response> {
    let message = format!(
        "Upcoming events in the city: {}. Let me show you the events page for detailed information.",
        ctx.knowledge.events().join(", ")
    );
    Ok(Response::navigate(message, ctx.page(EVENTS_PAGE)?))
}

fn food(cuisine_or_area: Option<&str>, ctx: &HandlerContext<'_>) -> Result<Response> {
    let restaurants = ctx.knowledge.restaurants().join(", ");

    let mut message = match cuisine_or_area {
        Some(p) => format!("Looking for {} options. Popular restaurants include: {}. ", p, restaurants),
        None => format!("Popular restaurants in the city: {}. ", restaurants),
    };
    message.push_str("Let me show you the food page for detailed information and locations.");

    let response = Response::navigate(message, ctx.page(FOOD_PAGE)?);
    Ok(match cuisine_or_area {
        Some(p) => response.with_filter("cuisine", p),
        None => response,
    })
}

fn navigation(destination: &str, ctx: &HandlerContext<'_>) -> Result<Response> {
    let key = normalize_destination(destination);

    match ctx.knowledge.page(&key, ctx.tenant) {
        Some(page) => Ok(Response::navigate(
            format!("Taking you to the {} page.", destination),
            page,
        )),
        None => {
            tracing::debug!(destination = %destination, "Unknown navigation destination");
            Ok(Response::info(format!(
                "I'm not sure how to navigate to '{}'. Try asking about specific services like 'apartments', 'events', 'food', or 'dashboard'.",
                destination
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use urban_intel_core::types::Action;

    fn ctx<'a>(kb: &'a KnowledgeBase, role: &'a str) -> HandlerContext<'a> {
        HandlerContext {
            knowledge: kb,
            role,
            tenant: "demo",
        }
    }

    #[test]
    fn normalizations_differ_per_handler() {
        assert_eq!(normalize_area("Area Y"), "area-y");
        assert_eq!(normalize_destination("Dash Board"), "dashboard");
        assert_eq!(normalize_destination(" net\tworks "), "networks");
    }

    #[test]
    fn living_without_area_lists_nothing() {
        let kb = KnowledgeBase::sample();
        let response = living(None, &ctx(&kb, "user")).unwrap();
        assert_eq!(response.message(), "I'll show you all available housing options in the city.");
        assert_eq!(response.page(), Some("/urban/demo/living"));
        assert!(response.filter_params().is_none());
    }

    #[test]
    fn living_matches_listing_area_by_substring() {
        let kb = KnowledgeBase::sample();
        let response = living(Some("area"), &ctx(&kb, "user")).unwrap();
        assert!(response.message().starts_with("I found 3 apartments near area:"));

        let response = living(Some("tech quarter"), &ctx(&kb, "user")).unwrap();
        assert!(response.message().starts_with("I'm searching for apartments near tech quarter."));
        assert_eq!(response.filter_params().unwrap()["area"], json!("tech-quarter"));
    }

    #[test]
    fn living_tolerates_punctuation_parameter() {
        let kb = KnowledgeBase::sample();
        let response = living(Some("?!"), &ctx(&kb, "user")).unwrap();
        assert_eq!(response.action(), Action::Navigate);
        assert_eq!(response.filter_params().unwrap()["area"], json!("?!"));
    }

    #[test]
    fn traffic_data_blob_is_verbatim() {
        let kb = KnowledgeBase::sample();
        let response = traffic(&ctx(&kb, "user")).unwrap();
        let data = response.data().unwrap();
        assert_eq!(data["status"], json!("moderate"));
        assert_eq!(data["congestion_level"], json!(68));
        assert_eq!(
            data["hotspots"],
            json!(["Highway 101", "Downtown Core", "Tech Quarter Bridge"])
        );
        assert!(response.page().is_none());
    }

    #[test]
    fn parking_area_does_not_filter_zones() {
        let kb = KnowledgeBase::sample();
        let response = parking(Some("downtown"), &ctx(&kb, "user")).unwrap();
        assert!(response
            .message()
            .contains("Available zones: Downtown Core, Shopping District, Business Quarter."));
        assert!(response.message().starts_with("Checking parking availability near downtown."));
        assert_eq!(response.feature(), Some("urban-view"));
        assert!(response.filter_params().is_none());
    }

    #[test]
    fn food_without_parameter_has_no_filter_params() {
        let kb = KnowledgeBase::sample();
        let response = food(None, &ctx(&kb, "user")).unwrap();
        assert!(response.filter_params().is_none());
        assert!(response
            .message()
            .starts_with("Popular restaurants in the city: Quantum Bistro, Neon Noodle House, Vertical Farm Cafe."));
    }

    #[test]
    fn missing_section_page_is_a_fault() {
        let kb = KnowledgeBase::from_yaml_str(
            r#"
traffic: { status: calm, congestion_level: 5 }
parking: { availability: "10% occupied" }
destinations:
  food: /urban/{tenant}/food
"#,
        )
        .unwrap();

        let err = events(&ctx(&kb, "user")).unwrap_err();
        assert!(matches!(err, Error::MissingKnowledge(_)));
    }

    #[test]
    fn fallback_ignores_context() {
        assert_eq!(fallback(), fallback());
        assert_eq!(fallback().action(), Action::Info);
        assert!(fallback().message().contains("**Navigation**"));
    }

    #[test]
    fn help_message_keeps_traffic_line_break() {
        assert!(HELP_MESSAGE.contains("\"road conditions\"  \n🅿️ **Parking**"));
    }
}
