use std::sync::Arc;

use urban_intel_core::{config::AppConfig, types::Action, KnowledgeBase};
use urban_intel_gateway::{ChatbotService, RuleRouter};

// ============================================================================
// Helper: service wired the way the binary wires it
// ============================================================================

fn service_from(config: &AppConfig) -> ChatbotService {
    let knowledge = match &config.knowledge.path {
        Some(path) => KnowledgeBase::from_yaml_file(path).unwrap(),
        None => KnowledgeBase::sample(),
    };
    let router = RuleRouter::builder(Arc::new(knowledge))
        .with_named_patterns(&config.router.extra_patterns)
        .unwrap()
        .build()
        .unwrap();
    ChatbotService::new(Arc::new(router))
}

#[test]
fn test_reference_queries() {
    let config = AppConfig::load().unwrap();
    let service = service_from(&config);

    let cases = [
        ("what are the apartments near area y", "user", Action::Navigate),
        ("show me traffic status", "developer", Action::Navigate),
        ("parking availability downtown", "user", Action::Navigate),
        ("upcoming events this week", "user", Action::Navigate),
        ("japanese restaurants", "user", Action::Navigate),
        ("go to dashboard", "developer", Action::Navigate),
        ("help me with the system", "user", Action::Info),
    ];

    for (query, role, expected) in cases {
        let result = service.process_query(query, role, "demo-city");
        assert!(result.success, "{query}");
        assert_eq!(result.action, expected, "{query}");
        if expected == Action::Navigate {
            assert!(result.page.unwrap().starts_with("/urban/demo-city/"), "{query}");
        }
    }
}

#[test]
fn test_extra_patterns_from_config() {
    let mut config = AppConfig::default();
    config
        .router
        .extra_patterns
        .insert("events_query".to_string(), vec![r"what'?s\s+on".to_string()]);
    let service = service_from(&config);

    let result = service.process_query("What's on this weekend?", "user", "demo");
    assert_eq!(result.action, Action::Navigate);
    assert_eq!(result.page.as_deref(), Some("/urban/demo/event"));
}

#[test]
fn test_yaml_knowledge_base_serves_same_answers() {
    let mut config = AppConfig::default();
    config.knowledge.path = Some(format!("{}/config/knowledge.yaml", env!("CARGO_MANIFEST_DIR")));
    let from_file = service_from(&config);
    let bundled = service_from(&AppConfig::default());

    for query in ["apartments near area z", "traffic status", "go to networks"] {
        assert_eq!(
            from_file.process_query(query, "user", "demo"),
            bundled.process_query(query, "user", "demo")
        );
    }
}
