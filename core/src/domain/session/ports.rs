use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    charts::value_objects::ComparisonChart,
    common::entities::app_errors::CoreError,
    narrative::entities::ChatMessage,
    product::value_objects::SearchProductsInput,
    session::{
        entities::Session,
        value_objects::{AlternativesReport, ProductDetails},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn get(&self, id: Uuid) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    /// Inserts or replaces the session; the last write wins.
    fn save(&self, session: Session) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Actions of the presentation layer, each applied to an explicit session.
pub trait SessionService: Send + Sync {
    fn get_or_create_session(
        &self,
        id: Option<Uuid>,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn delete_session(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn search(
        &self,
        session: Session,
        input: SearchProductsInput,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn select_product(
        &self,
        session: Session,
        product_id: String,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn current_product(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<ProductDetails, CoreError>> + Send;

    fn analyze_current_product(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn current_alternatives(
        &self,
        session: Session,
        max_results: usize,
    ) -> impl Future<Output = Result<AlternativesReport, CoreError>> + Send;

    fn comparison(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<ComparisonChart, CoreError>> + Send;

    fn remove_from_comparison(
        &self,
        session: Session,
        product_id: String,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn clear_comparison(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Replies to `message`; the exchange is recorded only when the reply succeeds.
    fn chat(
        &self,
        session: Session,
        message: String,
    ) -> impl Future<Output = Result<(Session, ChatMessage), CoreError>> + Send;
}
