use std::time::Duration;

use clap::Parser;
use nutriscan_core::domain::{
    common::{CatalogConfig, LLMConfig, NutriScanConfig, SessionConfig},
    narrative::value_objects::DEFAULT_MODEL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriscan-api", version, about = "NutriScan HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(
        long = "catalog-search-url",
        env = "CATALOG_SEARCH_URL",
        default_value = "https://world.openfoodfacts.org/cgi/search.pl"
    )]
    pub search_url: String,

    #[arg(
        long = "catalog-product-url",
        env = "CATALOG_PRODUCT_URL",
        default_value = "https://world.openfoodfacts.org/api/v0/product"
    )]
    pub product_url: String,

    #[arg(long = "catalog-timeout-secs", env = "CATALOG_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    #[arg(long = "catalog-user-agent", env = "CATALOG_USER_AGENT")]
    pub user_agent: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(
        long = "llm-base-url",
        env = "LLM_BASE_URL",
        default_value = "https://api.groq.com/openai/v1"
    )]
    pub base_url: String,

    #[arg(
        long = "llm-api-key",
        env = "GROQ_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub api_key: String,

    #[arg(long = "llm-model-primary", env = "LLM_MODEL_PRIMARY")]
    pub model_primary: Option<String>,

    #[arg(long = "llm-model-secondary", env = "LLM_MODEL_SECONDARY")]
    pub model_secondary: Option<String>,

    /// LiteLLM-style override, e.g. `groq/llama-3.1-8b-instant`.
    #[arg(long = "litellm-model-primary", env = "LITELLM_MODEL_PRIMARY", hide = true)]
    pub litellm_model_primary: Option<String>,

    #[arg(long = "litellm-model-secondary", env = "LITELLM_MODEL_SECONDARY", hide = true)]
    pub litellm_model_secondary: Option<String>,
}

impl LlmArgs {
    pub fn primary_model(&self) -> String {
        resolve_model(&self.model_primary, &self.litellm_model_primary)
    }

    pub fn secondary_model(&self) -> String {
        resolve_model(&self.model_secondary, &self.litellm_model_secondary)
    }
}

/// `LLM_MODEL_*` wins over `LITELLM_MODEL_*`. The `groq/` routing prefix is dropped
/// since requests already go to the configured endpoint.
fn resolve_model(model: &Option<String>, litellm_model: &Option<String>) -> String {
    if let Some(model) = model.as_deref().filter(|m| !m.trim().is_empty()) {
        return model.trim().to_string();
    }

    litellm_model
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(|m| m.strip_prefix("groq/").unwrap_or(m).to_string())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

#[derive(clap::Args, Debug, Clone)]
pub struct SessionArgs {
    #[arg(long = "session-idle-ttl-secs", env = "SESSION_IDLE_TTL_SECS", default_value_t = 3600)]
    pub idle_ttl_secs: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutriScanConfig {
    fn from(args: Args) -> Self {
        let default_catalog = CatalogConfig::default();

        Self {
            catalog: CatalogConfig {
                search_url: args.catalog.search_url,
                product_url: args.catalog.product_url,
                timeout: Duration::from_secs(args.catalog.timeout_secs),
                user_agent: args
                    .catalog
                    .user_agent
                    .unwrap_or(default_catalog.user_agent),
            },
            llm: LLMConfig {
                model_primary: args.llm.primary_model(),
                model_secondary: args.llm.secondary_model(),
                base_url: args.llm.base_url,
                api_key: args.llm.api_key,
            },
            session: SessionConfig {
                idle_ttl: Duration::from_secs(args.session.idle_ttl_secs),
            },
        }
    }
}
