use crate::domain::{
    narrative::{ports::LLMClient, value_objects::ModelSelection},
    product::ports::CatalogClient,
    session::ports::SessionRepository,
};

#[derive(Clone)]
pub struct Service<C, L, S>
where
    C: CatalogClient,
    L: LLMClient,
    S: SessionRepository,
{
    pub(crate) catalog_client: C,
    pub(crate) llm_client: L,
    pub(crate) session_repository: S,
    pub(crate) models: ModelSelection,
}

impl<C, L, S> Service<C, L, S>
where
    C: CatalogClient,
    L: LLMClient,
    S: SessionRepository,
{
    pub fn new(
        catalog_client: C,
        llm_client: L,
        session_repository: S,
        models: ModelSelection,
    ) -> Self {
        Self {
            catalog_client,
            llm_client,
            session_repository,
            models,
        }
    }
}
