use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriScanConfig {
    pub catalog: CatalogConfig,
    pub llm: LLMConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub search_url: String,
    pub product_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_url: "https://world.openfoodfacts.org/cgi/search.pl".to_string(),
            product_url: "https://world.openfoodfacts.org/api/v0/product".to_string(),
            timeout: Duration::from_secs(15),
            user_agent: format!("NutriScan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub base_url: String,
    pub api_key: String,
    pub model_primary: String,
    pub model_secondary: String,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub idle_ttl: Duration,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
