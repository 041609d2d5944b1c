use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    narrative::entities::{ChatMessage, CompletionRequest},
    product::entities::Product,
};

/// LLM Client trait for calling hosted completion models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw text of the first choice.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for AI-generated narratives
#[cfg_attr(test, mockall::automock)]
pub trait NarrativeService: Send + Sync {
    fn analyze_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn chat_with_user(
        &self,
        message: String,
        history: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Never fails: a completion error falls back to a deterministic summary.
    fn recommend_alternatives(
        &self,
        product: Product,
        candidates: Vec<Product>,
    ) -> impl Future<Output = String> + Send;
}
