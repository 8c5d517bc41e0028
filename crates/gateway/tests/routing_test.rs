use std::sync::Arc;

use urban_intel_core::{
    traits::IntentRouter,
    types::{Action, Response, RouteRequest},
    KnowledgeBase,
};
use urban_intel_gateway::{handlers::HELP_MESSAGE, RuleRouter};

fn router() -> RuleRouter {
    RuleRouter::new(Arc::new(KnowledgeBase::sample())).unwrap()
}

fn route(utterance: &str) -> Response {
    router().route(&RouteRequest::text(utterance)).unwrap()
}

fn route_as(utterance: &str, role: &str) -> Response {
    router()
        .route(&RouteRequest::text(utterance).with_role(role))
        .unwrap()
}

// ============================================================================
// Role sensitivity
// ============================================================================

#[test]
fn traffic_status_navigates_only_for_developers() {
    let utterances = [
        "traffic status",
        "Show me TRAFFIC Status please",
        "what is the traffic condition downtown?",
        "  current traffic situation  ",
    ];

    for utterance in utterances {
        let dev = route_as(utterance, "developer");
        assert_eq!(dev.action(), Action::Navigate, "{utterance}");
        assert_eq!(dev.page(), Some("/urban/demo/dashboard"));
        assert_eq!(dev.feature(), Some("traffic-analysis"));

        for role in ["user", "admin", ""] {
            let other = route_as(utterance, role);
            assert_eq!(other.action(), Action::Info, "{utterance} as {role}");
            assert!(other.data().is_some());
        }
    }
}

#[test]
fn traffic_message_embeds_status_and_hotspots() {
    let response = route("how is the traffic");
    assert_eq!(
        response.message(),
        "Current traffic status is moderate with 68% congestion level. \
         Main congestion areas: Highway 101, Downtown Core, Tech Quarter Bridge. \
         Would you like to see the urban view for more details?"
    );
}

#[test]
fn parking_always_navigates_to_dashboard() {
    let user = route_as("find parking", "user");
    assert_eq!(user.action(), Action::Navigate);
    assert_eq!(user.feature(), Some("urban-view"));

    let dev = route_as("parking near the stadium", "developer");
    assert_eq!(dev.action(), Action::Navigate);
    assert_eq!(dev.feature(), Some("parking-analysis"));
    assert!(dev.message().starts_with("Checking parking availability near the stadium."));
    assert!(dev
        .message()
        .contains("Available zones: Downtown Core, Shopping District, Business Quarter."));
}

// ============================================================================
// Precedence and extraction
// ============================================================================

#[test]
fn restaurants_near_downtown_routes_to_food() {
    let response = route("restaurants near downtown");
    assert_eq!(response.action(), Action::Navigate);
    assert_eq!(response.page(), Some("/urban/demo/food"));
    assert_eq!(response.filter_params().unwrap()["cuisine"], "downtown");
    assert!(response.message().starts_with("Looking for downtown options."));
}

#[test]
fn apartments_near_area_y_extracts_normalized_area() {
    let response = route("apartments near area Y");
    assert_eq!(response.action(), Action::Navigate);
    assert_eq!(response.page(), Some("/urban/demo/living"));
    assert_eq!(response.filter_params().unwrap()["area"], "area-y");
    assert!(response.message().contains("Skyline Apartments"));
    assert!(response.message().contains("$2,800/month"));
    assert!(response.message().starts_with("I found 1 apartments near area y:"));
}

#[test]
fn events_list_every_upcoming_event() {
    let response = route("What events are happening?");
    assert_eq!(response.action(), Action::Navigate);
    assert_eq!(response.page(), Some("/urban/demo/event"));
    assert!(response.filter_params().is_none());
    assert!(response
        .message()
        .contains("Tech Innovation Summit, Urban Green Festival, Cultural Heritage Night"));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn go_to_dashboard_navigates() {
    let response = route("go to dashboard");
    assert_eq!(response.action(), Action::Navigate);
    assert!(response.page().unwrap().ends_with("/dashboard"));
    assert_eq!(response.message(), "Taking you to the dashboard page.");
}

#[test]
fn navigation_strips_whitespace_and_scopes_tenant() {
    let response = router()
        .route(&RouteRequest::text("navigate to Well Ness").with_tenant("metro"))
        .unwrap();
    assert_eq!(response.page(), Some("/urban/metro/reflexing"));

    let response = route("open networks");
    assert_eq!(response.page(), Some("/networks"));
}

#[test]
fn unknown_destination_is_info() {
    let response = route("go to nonexistent-place");
    assert_eq!(response.action(), Action::Info);
    assert!(response.page().is_none());
    assert!(response.message().contains("'nonexistent'"));
}

// ============================================================================
// Fallback and determinism
// ============================================================================

#[test]
fn unmatched_and_empty_utterances_fall_back() {
    let unmatched = route("xyzzy plugh");
    assert_eq!(unmatched.action(), Action::Info);
    assert_eq!(unmatched.message(), HELP_MESSAGE);

    let empty = route("");
    assert_eq!(empty, unmatched);

    let dev = route_as("xyzzy plugh", "developer");
    assert_eq!(dev, unmatched);
}

#[test]
fn routing_is_idempotent() {
    let router = router();
    for utterance in ["traffic status", "japanese restaurants", "go to food", "help me"] {
        let request = RouteRequest::text(utterance).with_role("developer");
        let first = router.route(&request).unwrap();
        let second = router.route(&request).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn router_is_shareable_across_threads() {
    let router = Arc::new(router());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                let tenant = format!("city-{i}");
                router
                    .route(&RouteRequest::text("go to food").with_tenant(tenant.clone()))
                    .unwrap()
                    .page()
                    .map(str::to_string)
                    == Some(format!("/urban/{tenant}/food"))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
