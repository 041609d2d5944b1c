use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::domain::{
    common::{CatalogConfig, entities::app_errors::CoreError},
    product::{
        entities::Product, lenient::number_value, ports::CatalogClient,
        value_objects::CatalogQuery,
    },
};

/// OpenFoodFacts REST client. Every request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    search_url: String,
    product_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    status: Value,
    #[serde(default)]
    product: Option<Value>,
}

impl OpenFoodFactsClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build catalog HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            search_url: config.search_url,
            product_url: config.product_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, CoreError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Catalog request failed: {}", e);
            CoreError::CatalogUnavailable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Catalog returned error status: {}", status);
            return Err(CoreError::CatalogUnavailable(format!(
                "catalog returned {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse catalog response: {}", e);
            CoreError::CatalogUnavailable(format!("invalid catalog response: {}", e))
        })
    }
}

impl CatalogClient for OpenFoodFactsClient {
    async fn search(&self, query: CatalogQuery) -> Result<Vec<Product>, CoreError> {
        let mut params = vec![
            ("search_terms", query.search_terms),
            ("search_simple", "1".to_string()),
            ("action", "process".to_string()),
            ("json", "1".to_string()),
            ("page_size", query.page_size.to_string()),
        ];
        if let Some(sort_by) = query.sort_by {
            params.push(("sort_by", sort_by));
        }

        let response: SearchResponse = self
            .fetch(self.client.get(&self.search_url).query(&params))
            .await?;

        // Entries that are not objects are dropped, the rest decode leniently.
        let products = response
            .products
            .unwrap_or_default()
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();

        Ok(products)
    }

    async fn get_by_barcode(&self, barcode: String) -> Result<Option<Product>, CoreError> {
        let url = format!("{}/{}.json", self.product_url, barcode);
        let response: LookupResponse = self.fetch(self.client.get(&url)).await?;

        if number_value(&response.status) != Some(1.0) {
            return Ok(None);
        }

        match response.product {
            Some(Value::Object(fields)) if !fields.is_empty() => {
                serde_json::from_value(Value::Object(fields))
                    .map(Some)
                    .map_err(|e| CoreError::CatalogUnavailable(e.to_string()))
            }
            _ => Ok(None),
        }
    }
}
