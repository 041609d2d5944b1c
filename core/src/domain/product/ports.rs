use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::Product,
        value_objects::{CatalogQuery, SearchProductsInput},
    },
};

/// Remote product catalog (OpenFoodFacts).
#[cfg_attr(test, mockall::automock)]
pub trait CatalogClient: Send + Sync {
    fn search(
        &self,
        query: CatalogQuery,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    /// Looks a product up by an already cleaned barcode.
    fn get_by_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;
}

/// Catalog operations exposed to the presentation layer.
///
/// These never fail: catalog errors are logged and turned into empty results.
#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    fn search_products(
        &self,
        input: SearchProductsInput,
    ) -> impl Future<Output = Vec<Product>> + Send;

    fn get_product(&self, barcode: String) -> impl Future<Output = Option<Product>> + Send;

    fn find_alternatives(
        &self,
        product: Product,
        max_results: usize,
    ) -> impl Future<Output = Vec<Product>> + Send;
}
