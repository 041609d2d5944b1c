use tracing::info;
use uuid::Uuid;

use crate::domain::{
    charts::{helpers::compare_products, value_objects::ComparisonChart},
    common::{entities::app_errors::CoreError, services::Service},
    narrative::{
        entities::ChatMessage,
        fallback::NO_ALTERNATIVE_FOUND,
        ports::{LLMClient, NarrativeService},
    },
    product::{
        ports::{CatalogClient, ProductService},
        value_objects::SearchProductsInput,
    },
    session::{
        entities::Session,
        ports::{SessionRepository, SessionService},
        value_objects::{AlternativesReport, ProductDetails},
    },
};

impl<C, L, S> Service<C, L, S>
where
    C: CatalogClient,
    L: LLMClient,
    S: SessionRepository,
{
    async fn store(&self, mut session: Session) -> Result<Session, CoreError> {
        session.touch();
        self.session_repository.save(session).await
    }
}

impl<C, L, S> SessionService for Service<C, L, S>
where
    C: CatalogClient,
    L: LLMClient,
    S: SessionRepository,
{
    async fn get_or_create_session(&self, id: Option<Uuid>) -> Result<Session, CoreError> {
        if let Some(id) = id
            && let Some(session) = self.session_repository.get(id).await?
        {
            return self.store(session).await;
        }

        let session = self.session_repository.save(Session::new()).await?;
        info!(session_id = %session.id, "Session created");

        Ok(session)
    }

    async fn delete_session(&self, id: Uuid) -> Result<(), CoreError> {
        self.session_repository.delete(id).await?;
        info!(session_id = %id, "Session deleted");
        Ok(())
    }

    async fn search(
        &self,
        mut session: Session,
        input: SearchProductsInput,
    ) -> Result<Session, CoreError> {
        let results = self.search_products(input).await;
        session.record_search(results);
        self.store(session).await
    }

    async fn select_product(
        &self,
        mut session: Session,
        product_id: String,
    ) -> Result<Session, CoreError> {
        match session.find_search_result(&product_id).cloned() {
            Some(product) => session.select(product),
            None => {
                let product = self
                    .get_product(product_id)
                    .await
                    .ok_or(CoreError::NotFound)?;
                session.view(product);
            }
        }

        self.store(session).await
    }

    async fn current_product(&self, session: Session) -> Result<ProductDetails, CoreError> {
        let product = session.current()?.clone();

        Ok(ProductDetails::new(product))
    }

    async fn analyze_current_product(&self, session: Session) -> Result<String, CoreError> {
        let product = session.current()?.clone();
        self.analyze_product(product).await
    }

    async fn current_alternatives(
        &self,
        session: Session,
        max_results: usize,
    ) -> Result<AlternativesReport, CoreError> {
        let product = session.current()?.clone();
        let alternatives = self.find_alternatives(product.clone(), max_results).await;

        let recommendation = if alternatives.is_empty() {
            NO_ALTERNATIVE_FOUND.to_string()
        } else {
            self.recommend_alternatives(product.clone(), alternatives.clone())
                .await
        };

        Ok(AlternativesReport {
            product,
            alternatives,
            recommendation,
        })
    }

    async fn comparison(&self, session: Session) -> Result<ComparisonChart, CoreError> {
        compare_products(&session.selected_products)
    }

    async fn remove_from_comparison(
        &self,
        mut session: Session,
        product_id: String,
    ) -> Result<Session, CoreError> {
        if !session.remove_from_comparison(&product_id) {
            return Err(CoreError::NotFound);
        }
        self.store(session).await
    }

    async fn clear_comparison(&self, mut session: Session) -> Result<Session, CoreError> {
        session.clear_comparison();
        self.store(session).await
    }

    async fn chat(
        &self,
        mut session: Session,
        message: String,
    ) -> Result<(Session, ChatMessage), CoreError> {
        let answer = self
            .chat_with_user(message.clone(), session.chat_history.clone())
            .await?;

        session.push_chat_exchange(message, answer.clone());
        let session = self.store(session).await?;

        Ok((session, ChatMessage::assistant(answer)))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeDelta;

    use super::*;
    use crate::domain::{
        narrative::{ports::MockLLMClient, value_objects::ModelSelection},
        product::{
            entities::{Nutriments, Product},
            ports::MockCatalogClient,
            value_objects::SearchFilters,
        },
        session::ports::MockSessionRepository,
    };
    use crate::infrastructure::session::in_memory_session_repository::InMemorySessionRepository;

    type TestService = Service<MockCatalogClient, MockLLMClient, MockSessionRepository>;

    fn service(
        catalog_client: MockCatalogClient,
        llm_client: MockLLMClient,
        session_repository: MockSessionRepository,
    ) -> TestService {
        Service::new(
            catalog_client,
            llm_client,
            session_repository,
            ModelSelection::new("primary", "secondary"),
        )
    }

    fn saving_repository() -> MockSessionRepository {
        let mut repository = MockSessionRepository::new();
        repository
            .expect_save()
            .returning(|session| Box::pin(async move { Ok(session) }));
        repository
    }

    fn product(code: &str, grade: &str) -> Product {
        Product {
            code: Some(code.to_string()),
            product_name: Some(format!("Produit {code}")),
            nutriscore_grade: Some(grade.to_string()),
            categories_tags: vec!["en:breakfast-cereals".to_string()],
            nutriments: Nutriments {
                sugars_100g: Some(12.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn unknown_session_id_creates_a_new_session() {
        let mut repository = saving_repository();
        repository
            .expect_get()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(MockCatalogClient::new(), MockLLMClient::new(), repository);
        let requested = Uuid::new_v4();
        let session = service.get_or_create_session(Some(requested)).await.unwrap();

        assert_ne!(session.id, requested);
        assert!(session.search_results.is_empty());
    }

    #[tokio::test]
    async fn known_session_is_refreshed_on_access() {
        let mut existing = Session::new();
        existing.history.push("1".to_string());
        existing.updated_at -= TimeDelta::minutes(30);
        let returned = existing.clone();

        let mut repository = MockSessionRepository::new();
        repository.expect_get().returning(move |_| {
            let session = returned.clone();
            Box::pin(async move { Ok(Some(session)) })
        });
        repository
            .expect_save()
            .times(1)
            .returning(|session| Box::pin(async move { Ok(session) }));

        let service = service(MockCatalogClient::new(), MockLLMClient::new(), repository);
        let session = service.get_or_create_session(Some(existing.id)).await.unwrap();

        assert_eq!(session.id, existing.id);
        assert_eq!(session.history, existing.history);
        assert!(session.updated_at > existing.updated_at);
    }

    #[tokio::test]
    async fn reading_keeps_a_session_alive_past_its_idle_ttl() {
        let service = Service::new(
            MockCatalogClient::new(),
            MockLLMClient::new(),
            InMemorySessionRepository::new(Duration::from_millis(300)),
            ModelSelection::new("primary", "secondary"),
        );
        let id = service.get_or_create_session(None).await.unwrap().id;

        for _ in 0..4 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let session = service.get_or_create_session(Some(id)).await.unwrap();
            assert_eq!(session.id, id);
            assert!(matches!(
                service.comparison(session).await,
                Err(CoreError::NotEnoughProducts)
            ));
        }

        let session = service.get_or_create_session(Some(id)).await.unwrap();
        assert_eq!(session.id, id);
    }

    #[tokio::test]
    async fn search_stores_results_and_clears_current_product() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_search()
            .returning(|_| Box::pin(async { Ok(vec![product("1", "b"), product("2", "c")]) }));

        let service = service(catalog, MockLLMClient::new(), saving_repository());
        let mut session = Session::new();
        session.select(product("9", "e"));

        let session = service
            .search(
                session,
                SearchProductsInput {
                    query: "muesli".to_string(),
                    filters: SearchFilters::default(),
                    page_size: 20,
                },
            )
            .await
            .unwrap();

        assert_eq!(session.search_results.len(), 2);
        assert!(session.current_product.is_none());
    }

    #[tokio::test]
    async fn selection_prefers_search_results_over_catalog() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_get_by_barcode().never();

        let service = service(catalog, MockLLMClient::new(), saving_repository());
        let mut session = Session::new();
        session.record_search(vec![product("1", "b")]);

        let session = service
            .select_product(session, "1".to_string())
            .await
            .unwrap();

        assert_eq!(session.current_product, Some(product("1", "b")));
        assert_eq!(session.history, vec!["1".to_string()]);
        assert_eq!(session.selected_products.len(), 1);
    }

    #[tokio::test]
    async fn product_outside_results_is_only_viewed() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_get_by_barcode()
            .times(1)
            .returning(|_| Box::pin(async { Ok(Some(product("12345678", "a"))) }));

        let service = service(catalog, MockLLMClient::new(), saving_repository());
        let mut session = Session::new();
        session.record_search(vec![product("1", "d")]);
        session.select(product("1", "d"));

        let session = service
            .select_product(session, "12345678".to_string())
            .await
            .unwrap();

        assert_eq!(session.current_product, Some(product("12345678", "a")));
        assert_eq!(session.history, vec!["1".to_string()]);
        assert_eq!(session.selected_products, vec![product("1", "d")]);
    }

    #[tokio::test]
    async fn selection_falls_back_to_catalog_lookup() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_get_by_barcode()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(catalog, MockLLMClient::new(), MockSessionRepository::new());
        let result = service
            .select_product(Session::new(), "12345678".to_string())
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn current_product_requires_a_selection() {
        let service = service(
            MockCatalogClient::new(),
            MockLLMClient::new(),
            MockSessionRepository::new(),
        );

        assert_eq!(
            service.current_product(Session::new()).await,
            Err(CoreError::NoCurrentProduct)
        );
        assert_eq!(
            service.analyze_current_product(Session::new()).await,
            Err(CoreError::NoCurrentProduct)
        );
    }

    #[tokio::test]
    async fn current_product_carries_charts() {
        let service = service(
            MockCatalogClient::new(),
            MockLLMClient::new(),
            MockSessionRepository::new(),
        );
        let mut session = Session::new();
        session.select(product("1", "b"));

        let details = service.current_product(session).await.unwrap();
        assert_eq!(details.charts.key_nutrients.points[0].value, 12.0);
    }

    #[tokio::test]
    async fn no_alternatives_skip_the_recommendation_call() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_search()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        let mut llm = MockLLMClient::new();
        llm.expect_complete().never();

        let service = service(catalog, llm, MockSessionRepository::new());
        let mut session = Session::new();
        session.select(product("1", "c"));

        let report = service.current_alternatives(session, 5).await.unwrap();
        assert!(report.alternatives.is_empty());
        assert_eq!(report.recommendation, NO_ALTERNATIVE_FOUND);
    }

    #[tokio::test]
    async fn alternatives_come_with_a_recommendation() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_search()
            .returning(|_| Box::pin(async { Ok(vec![product("2", "a"), product("3", "e")]) }));
        let mut llm = MockLLMClient::new();
        llm.expect_complete()
            .returning(|_| Box::pin(async { Ok("Essayez le produit 2.".to_string()) }));

        let service = service(catalog, llm, MockSessionRepository::new());
        let mut session = Session::new();
        session.select(product("1", "c"));

        let report = service.current_alternatives(session, 5).await.unwrap();
        assert_eq!(report.alternatives, vec![product("2", "a")]);
        assert_eq!(report.recommendation, "Essayez le produit 2.");
    }

    #[tokio::test]
    async fn comparison_needs_two_selected_products() {
        let service = service(
            MockCatalogClient::new(),
            MockLLMClient::new(),
            MockSessionRepository::new(),
        );
        let mut session = Session::new();
        session.select(product("1", "c"));

        assert_eq!(
            service.comparison(session.clone()).await,
            Err(CoreError::NotEnoughProducts)
        );

        session.select(product("2", "a"));
        let chart = service.comparison(session).await.unwrap();
        assert_eq!(chart.products.len(), 2);
    }

    #[tokio::test]
    async fn removing_an_unselected_product_is_not_found() {
        let service = service(
            MockCatalogClient::new(),
            MockLLMClient::new(),
            saving_repository(),
        );
        let mut session = Session::new();
        session.select(product("1", "c"));

        assert_eq!(
            service
                .remove_from_comparison(session.clone(), "2".to_string())
                .await,
            Err(CoreError::NotFound)
        );

        let session = service
            .remove_from_comparison(session, "1".to_string())
            .await
            .unwrap();
        assert!(session.selected_products.is_empty());
    }

    #[tokio::test]
    async fn chat_records_exchange_after_reply() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete()
            .returning(|_| Box::pin(async { Ok("Avec modération.".to_string()) }));

        let service = service(MockCatalogClient::new(), llm, saving_repository());
        let (session, reply) = service
            .chat(Session::new(), "Et le chocolat ?".to_string())
            .await
            .unwrap();

        assert_eq!(reply, ChatMessage::assistant("Avec modération."));
        assert_eq!(
            session.chat_history,
            vec![
                ChatMessage::user("Et le chocolat ?"),
                ChatMessage::assistant("Avec modération."),
            ]
        );
    }

    #[tokio::test]
    async fn failed_chat_leaves_history_untouched() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
        });
        let mut repository = MockSessionRepository::new();
        repository.expect_save().never();

        let service = service(MockCatalogClient::new(), llm, repository);
        let result = service
            .chat(Session::new(), "Bonjour".to_string())
            .await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError("down".to_string()))
        );
    }
}
