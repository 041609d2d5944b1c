use tracing::{debug, warn};

use crate::domain::{
    common::services::Service,
    narrative::ports::LLMClient,
    product::{
        entities::Product,
        helpers::{clean_barcode, derive_search_term, is_barcode, select_alternatives},
        policies::matches,
        ports::{CatalogClient, ProductService},
        value_objects::{
            ALTERNATIVES_PAGE_SIZE, CatalogQuery, NUTRISCORE_SORT_KEY, SearchProductsInput,
        },
    },
    session::ports::SessionRepository,
};

impl<C, L, S> ProductService for Service<C, L, S>
where
    C: CatalogClient,
    L: LLMClient,
    S: SessionRepository,
{
    async fn search_products(&self, input: SearchProductsInput) -> Vec<Product> {
        if is_barcode(&input.query) {
            return match self.get_product(input.query).await {
                Some(product) if matches(&product, &input.filters) => vec![product],
                _ => Vec::new(),
            };
        }

        let query = CatalogQuery::new(input.query, input.page_size);
        match self.catalog_client.search(query).await {
            Ok(products) => products
                .into_iter()
                .filter(|product| matches(product, &input.filters))
                .collect(),
            Err(e) => {
                warn!("Catalog search failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn get_product(&self, barcode: String) -> Option<Product> {
        let barcode = clean_barcode(&barcode);
        match self.catalog_client.get_by_barcode(barcode.clone()).await {
            Ok(product) => product,
            Err(e) => {
                warn!(%barcode, "Catalog lookup failed: {}", e);
                None
            }
        }
    }

    async fn find_alternatives(&self, product: Product, max_results: usize) -> Vec<Product> {
        let Some(search_term) = derive_search_term(&product) else {
            debug!("No category to search alternatives for");
            return Vec::new();
        };

        let query = CatalogQuery::new(search_term, ALTERNATIVES_PAGE_SIZE)
            .sorted_by(NUTRISCORE_SORT_KEY);

        match self.catalog_client.search(query).await {
            Ok(candidates) => select_alternatives(&product, candidates, max_results),
            Err(e) => {
                warn!("Alternative search failed: {}", e);
                Vec::new()
            }
        }
    }
}
