//! Urban Intel - rule-based intent router for the urban intelligence system.
//!
//! Serves the chatbot API over HTTP, or answers one-off queries from the
//! command line.

use clap::{Parser, Subcommand};
use std::sync::Arc;

use urban_intel_core::{config::AppConfig, KnowledgeBase};
use urban_intel_gateway::{ChatbotService, GatewayConfig, GatewayServer, RuleRouter};

#[derive(Parser)]
#[command(name = "urban-intel", version, about = "Rule-based intent router for city queries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP gateway (default)
    Serve,
    /// Route a single query and print the result as JSON
    Ask {
        /// Free-text query
        query: String,
        /// Caller role
        #[arg(long)]
        role: Option<String>,
        /// Tenant (city) identifier
        #[arg(long)]
        tenant: Option<String>,
    },
    /// Run the reference queries and print a summary per query
    Demo,
}

const DEMO_QUERIES: &[(&str, &str)] = &[
    ("what are the apartments near area y", "user"),
    ("show me traffic status", "developer"),
    ("parking availability downtown", "user"),
    ("upcoming events this week", "user"),
    ("japanese restaurants", "user"),
    ("go to dashboard", "developer"),
    ("help me with the system", "user"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    urban_intel_gateway::configure_tracing(config.logging.json)?;

    let knowledge = match &config.knowledge.path {
        Some(path) => {
            tracing::info!(path = %path, "Loading knowledge base");
            KnowledgeBase::from_yaml_file(path)?
        }
        None => {
            tracing::info!("Using bundled reference knowledge base");
            KnowledgeBase::sample()
        }
    };

    let router = RuleRouter::builder(Arc::new(knowledge))
        .with_named_patterns(&config.router.extra_patterns)?
        .build()?;
    let service = ChatbotService::new(Arc::new(router));

    let role = |role: Option<String>| role.unwrap_or_else(|| config.router.default_role.clone());
    let tenant = |tenant: Option<String>| tenant.unwrap_or_else(|| config.router.default_tenant.clone());

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let gateway = GatewayConfig {
                host: config.server.host.clone(),
                port: config.server.port,
                enable_cors: config.server.enable_cors,
                default_role: config.router.default_role.clone(),
                default_tenant: config.router.default_tenant.clone(),
            };

            tracing::info!(
                "Starting Urban Intel v{} on {}:{}",
                env!("CARGO_PKG_VERSION"),
                gateway.host,
                gateway.port
            );

            GatewayServer::new(gateway, service).run().await?;
        }
        Command::Ask { query, role: r, tenant: t } => {
            let result = service.process_query(&query, &role(r), &tenant(t));
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Demo => {
            let tenant = tenant(None);
            println!("Urban Intel reference queries");
            println!("{}", "=".repeat(50));

            for (query, role) in DEMO_QUERIES {
                let result = service.process_query(query, role, &tenant);
                println!();
                println!("Query:    {}", query);
                println!("Role:     {}", role);
                println!("Action:   {}", result.action);
                if let Some(page) = &result.page {
                    println!("Page:     {}", page);
                }
                if let Some(feature) = &result.feature {
                    println!("Feature:  {}", feature);
                }
                if let Some(filters) = &result.filter_params {
                    println!("Filters:  {}", serde_json::Value::Object(filters.clone()));
                }
                println!("Response: {}", result.message);
                println!("{}", "-".repeat(30));
            }
        }
    }

    Ok(())
}
