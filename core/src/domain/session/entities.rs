use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    narrative::entities::ChatMessage,
    product::entities::Product,
};

/// Ephemeral state of one user of the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub id: Uuid,
    pub search_results: Vec<Product>,
    pub current_product: Option<Product>,
    /// Identities of visited products, oldest first, without duplicates.
    pub history: Vec<String>,
    /// Products queued for comparison, unique by identity.
    pub selected_products: Vec<Product>,
    pub chat_history: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            search_results: Vec::new(),
            current_product: None,
            history: Vec::new(),
            selected_products: Vec::new(),
            chat_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        now.signed_duration_since(self.updated_at) > ttl
    }

    /// Replaces the search results; a new search deselects the current product.
    pub fn record_search(&mut self, results: Vec<Product>) {
        self.search_results = results;
        self.current_product = None;
    }

    pub fn current(&self) -> Result<&Product, CoreError> {
        self.current_product
            .as_ref()
            .ok_or(CoreError::NoCurrentProduct)
    }

    pub fn find_search_result(&self, product_id: &str) -> Option<&Product> {
        self.search_results
            .iter()
            .find(|product| product.identity() == Some(product_id))
    }

    /// Makes `product` the current product and records the visit.
    ///
    /// Re-selecting the current product leaves the session unchanged.
    pub fn select(&mut self, product: Product) {
        if self
            .current_product
            .as_ref()
            .is_some_and(|current| current.has_same_identity(&product))
        {
            return;
        }

        if let Some(identity) = product.identity()
            && !self.history.iter().any(|visited| visited == identity)
        {
            self.history.push(identity.to_string());
        }

        if !self
            .selected_products
            .iter()
            .any(|selected| selected.has_same_identity(&product))
        {
            self.selected_products.push(product.clone());
        }

        self.current_product = Some(product);
    }

    /// Shows `product` without recording a visit or adding it to the comparison.
    pub fn view(&mut self, product: Product) {
        self.current_product = Some(product);
    }

    /// Returns whether a product was removed.
    pub fn remove_from_comparison(&mut self, product_id: &str) -> bool {
        let before = self.selected_products.len();
        self.selected_products
            .retain(|product| product.identity() != Some(product_id));
        self.selected_products.len() != before
    }

    pub fn clear_comparison(&mut self) {
        self.selected_products.clear();
    }

    pub fn push_chat_exchange(&mut self, message: String, answer: String) {
        self.chat_history.push(ChatMessage::user(message));
        self.chat_history.push(ChatMessage::assistant(answer));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::narrative::entities::ChatRole;

    fn product(code: &str) -> Product {
        Product {
            code: Some(code.to_string()),
            product_name: Some(format!("Produit {code}")),
            ..Default::default()
        }
    }

    #[test]
    fn new_search_clears_current_product() {
        let mut session = Session::new();
        session.select(product("1"));

        session.record_search(vec![product("2")]);

        assert!(session.current_product.is_none());
        assert_eq!(session.search_results, vec![product("2")]);
        assert_eq!(session.history, vec!["1".to_string()]);
    }

    #[test]
    fn selection_deduplicates_history_and_comparison() {
        let mut session = Session::new();
        session.select(product("1"));
        session.select(product("2"));
        session.select(product("1"));

        assert_eq!(session.history, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(session.selected_products.len(), 2);
        assert_eq!(session.current_product, Some(product("1")));
    }

    #[test]
    fn selection_uses_id_when_code_is_missing() {
        let mut session = Session::new();
        session.select(Product {
            id: Some("abc".to_string()),
            ..Default::default()
        });

        assert_eq!(session.history, vec!["abc".to_string()]);
    }

    #[test]
    fn viewing_only_changes_current_product() {
        let mut session = Session::new();
        session.select(product("1"));

        session.view(product("2"));

        assert_eq!(session.current_product, Some(product("2")));
        assert_eq!(session.history, vec!["1".to_string()]);
        assert_eq!(session.selected_products, vec![product("1")]);
    }

    #[test]
    fn comparison_can_be_trimmed_and_cleared() {
        let mut session = Session::new();
        session.select(product("1"));
        session.select(product("2"));
        session.select(product("3"));

        assert!(session.remove_from_comparison("2"));
        assert!(!session.remove_from_comparison("2"));
        assert_eq!(session.selected_products, vec![product("1"), product("3")]);

        session.clear_comparison();
        assert!(session.selected_products.is_empty());
        assert_eq!(session.history.len(), 3);
    }

    #[test]
    fn chat_exchange_appends_user_then_assistant() {
        let mut session = Session::new();
        session.push_chat_exchange("Question".to_string(), "Réponse".to_string());

        assert_eq!(session.chat_history.len(), 2);
        assert_eq!(session.chat_history[0].role, ChatRole::User);
        assert_eq!(session.chat_history[1].content, "Réponse");
    }

    #[test]
    fn idleness_is_measured_from_last_update() {
        let session = Session::new();
        let ttl = Duration::from_secs(60);

        assert!(!session.is_idle(session.updated_at + TimeDelta::seconds(30), ttl));
        assert!(session.is_idle(session.updated_at + TimeDelta::seconds(61), ttl));
    }
}
