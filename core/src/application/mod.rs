use crate::{
    domain::{
        common::{NutriScanConfig, entities::app_errors::CoreError, services::Service},
        narrative::value_objects::ModelSelection,
    },
    infrastructure::{
        catalog::open_food_facts_client::OpenFoodFactsClient,
        llm::chat_completions_client::ChatCompletionsClient,
        session::in_memory_session_repository::InMemorySessionRepository,
    },
};

pub type NutriScanService =
    Service<OpenFoodFactsClient, ChatCompletionsClient, InMemorySessionRepository>;

pub fn create_service(config: NutriScanConfig) -> Result<NutriScanService, CoreError> {
    let catalog_client = OpenFoodFactsClient::new(config.catalog)?;
    let llm_client = ChatCompletionsClient::new(&config.llm);
    let session_repository = InMemorySessionRepository::new(config.session.idle_ttl);

    let models = ModelSelection::new(config.llm.model_primary, config.llm.model_secondary);

    Ok(Service::new(
        catalog_client,
        llm_client,
        session_repository,
        models,
    ))
}
