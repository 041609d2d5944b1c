use tracing::{info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    narrative::{
        entities::{ChatMessage, CompletionRequest},
        fallback::fallback_recommendation,
        ports::{LLMClient, NarrativeService},
        prompts::{alternatives_prompt, chat_prompt, product_analysis_prompt},
        value_objects::{NarrativePrompt, TEMPERATURE},
    },
    product::{entities::Product, ports::CatalogClient},
    session::ports::SessionRepository,
};

impl<C, L, S> Service<C, L, S>
where
    C: CatalogClient,
    L: LLMClient,
    S: SessionRepository,
{
    /// Sends one prompt to the given model.
    async fn generate(&self, model: &str, prompt: NarrativePrompt) -> Result<String, CoreError> {
        let request = CompletionRequest {
            model: model.to_string(),
            max_tokens: prompt.max_tokens,
            temperature: TEMPERATURE,
            messages: prompt.into_messages(),
        };

        self.llm_client.complete(request).await
    }
}

impl<C, L, S> NarrativeService for Service<C, L, S>
where
    C: CatalogClient,
    L: LLMClient,
    S: SessionRepository,
{
    async fn analyze_product(&self, product: Product) -> Result<String, CoreError> {
        info!(product = ?product.identity(), "Analyzing product");
        self.generate(&self.models.primary, product_analysis_prompt(&product))
            .await
    }

    async fn chat_with_user(
        &self,
        message: String,
        history: Vec<ChatMessage>,
    ) -> Result<String, CoreError> {
        self.generate(&self.models.primary, chat_prompt(message, history))
            .await
    }

    async fn recommend_alternatives(&self, product: Product, candidates: Vec<Product>) -> String {
        let prompt = alternatives_prompt(&product, &candidates);

        match self.generate(&self.models.primary, prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Recommendation generation failed, using fallback: {}", e);
                fallback_recommendation(&product, &candidates)
            }
        }
    }
}
