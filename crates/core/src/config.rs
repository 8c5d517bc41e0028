use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::collections::HashMap;

use crate::types::{DEFAULT_ROLE, DEFAULT_TENANT};
use crate::Result;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub router: RouterConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RouterConfig {
    pub default_role: String,
    pub default_tenant: String,
    /// Category key -> extra patterns tried after the built-in ones.
    #[serde(default)]
    pub extra_patterns: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct KnowledgeConfig {
    /// YAML knowledge base. The bundled reference sample is used when unset.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_env(None)
    }

    /// Load with `vars` standing in for the process environment when given.
    fn load_with_env(vars: Option<Map<String, String>>) -> Result<Self> {
        let env = std::env::var("URBAN_INTEL_ENV").unwrap_or_else(|_| "development".into());
        let d = Self::default();

        let s = Config::builder()
            .set_default("server.host", d.server.host)?
            .set_default("server.port", i64::from(d.server.port))?
            .set_default("server.enable_cors", d.server.enable_cors)?
            .set_default("router.default_role", d.router.default_role)?
            .set_default("router.default_tenant", d.router.default_tenant)?
            .set_default("logging.json", d.logging.json)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Map APP__SERVER__PORT=3000 to server.port
            .add_source(Environment::with_prefix("APP").separator("__").source(vars))
            .build()?;

        Ok(s.try_deserialize()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 3000,
                enable_cors: true,
            },
            router: RouterConfig {
                default_role: DEFAULT_ROLE.into(),
                default_tenant: DEFAULT_TENANT.into(),
                extra_patterns: HashMap::new(),
            },
            knowledge: KnowledgeConfig { path: None },
            logging: LoggingConfig { json: false },
        }
    }
}
