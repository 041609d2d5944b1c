#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_test::{TestResponse, TestServer};
use nutriscan_api::{
    application::http::server::http_server::{router, state},
    args::{Args, CatalogArgs, LlmArgs, LogArgs, ServerArgs, SessionArgs},
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub const NUTELLA_BARCODE: &str = "3017620422003";
pub const SESSION_HEADER: &str = "x-session-id";

pub fn nutella() -> Value {
    json!({
        "code": NUTELLA_BARCODE,
        "product_name": "Nutella",
        "brands": "Ferrero",
        "categories": "Petit-déjeuners, Produits à tartiner sucrés",
        "categories_tags": ["en:breakfasts", "en:spreads"],
        "labels": "Sans huile de palme",
        "nutriscore_grade": "e",
        "nova_group": 4,
        "image_front_small_url": "https://images.openfoodfacts.org/nutella.200.jpg",
        "image_url": "https://images.openfoodfacts.org/nutella.full.jpg",
        "ingredients_text": "Sucre, huile de palme, noisettes 13%, cacao maigre 7,4%",
        "nutriments": {
            "sugars_100g": 56.3,
            "salt_100g": 0.107,
            "saturated-fat_100g": 10.6,
            "carbohydrates_100g": 57.5,
            "proteins_100g": 6.3,
            "fat_100g": 30.9
        }
    })
}

fn organic_spread() -> Value {
    json!({
        "code": "3229820129488",
        "product_name": "Pâte à tartiner bio",
        "brands": "Bjorg",
        "categories_tags": ["en:spreads"],
        "labels": "Bio, Vegan",
        "nutriscore_grade": "c",
        "nutriments": { "sugars_100g": "29,5", "salt_100g": 0.05 }
    })
}

fn almond_butter() -> Value {
    json!({
        "code": "3760000000001",
        "product_name": "Purée d'amandes",
        "brands": "Jean Hervé",
        "nutriscore_grade": "a",
        "nutriments": { "sugars_100g": 4.2 }
    })
}

fn hazelnut_paste() -> Value {
    json!({
        "code": "3760000000002",
        "product_name": "Pâte de noisettes",
        "nutriscore_grade": "B",
        "nutriments": { "sugars_100g": 3.9 }
    })
}

async fn catalog_search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let products = match params.get("search_terms").map(String::as_str) {
        Some("nutella") => json!([nutella(), organic_spread()]),
        Some("spreads") => json!([
            nutella(),
            hazelnut_paste(),
            { "code": "3760000000003", "nutriscore_grade": "a" },
            organic_spread(),
            almond_butter(),
            "not a product"
        ]),
        _ => json!([]),
    };

    Json(json!({ "count": products.as_array().map_or(0, Vec::len), "products": products }))
}

async fn catalog_lookup(Path(file): Path<String>) -> Json<Value> {
    if file == format!("{}.json", NUTELLA_BARCODE) {
        Json(json!({ "status": 1, "product": nutella() }))
    } else {
        Json(json!({ "status": 0, "status_verbose": "product not found" }))
    }
}

/// Answers `"{model}:{max_tokens}"` so tests can tell which call site spoke.
async fn chat_completions(State(failing): State<Arc<AtomicBool>>, Json(body): Json<Value>) -> Response {
    if failing.load(Ordering::SeqCst) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": { "message": "over capacity" } })),
        )
            .into_response();
    }

    let content = format!(
        "{}:{}",
        body["model"].as_str().unwrap_or_default(),
        body["max_tokens"]
    );

    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
    .into_response()
}

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub struct NutriScanTestContext {
    pub server: TestServer,
    pub llm_failing: Arc<AtomicBool>,
}

impl AsyncTestContext for NutriScanTestContext {
    async fn setup() -> Self {
        let catalog_url = spawn(
            Router::new()
                .route("/cgi/search.pl", get(catalog_search))
                .route("/api/v0/product/{file}", get(catalog_lookup)),
        )
        .await;

        let llm_failing = Arc::new(AtomicBool::new(false));
        let llm_url = spawn(
            Router::new()
                .route("/chat/completions", post(chat_completions))
                .with_state(llm_failing.clone()),
        )
        .await;

        let args = Args {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                root_path: String::new(),
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            catalog: CatalogArgs {
                search_url: format!("{}/cgi/search.pl", catalog_url),
                product_url: format!("{}/api/v0/product", catalog_url),
                timeout_secs: 5,
                user_agent: None,
            },
            llm: LlmArgs {
                base_url: llm_url,
                api_key: "test-key".to_string(),
                model_primary: Some("primary-model".to_string()),
                model_secondary: Some("secondary-model".to_string()),
                litellm_model_primary: None,
                litellm_model_secondary: None,
            },
            session: SessionArgs {
                idle_ttl_secs: 3600,
            },
            log: LogArgs {
                filter: "warn".to_string(),
                json: false,
            },
        };

        let state = state(Arc::new(args)).await.unwrap();
        let server = TestServer::new(router(state).unwrap()).unwrap();

        Self {
            server,
            llm_failing,
        }
    }
}

impl NutriScanTestContext {
    pub fn fail_completions(&self) {
        self.llm_failing.store(true, Ordering::SeqCst);
    }

    /// Opens a session and returns its id.
    pub async fn open_session(&self) -> HeaderValue {
        let response = self.server.get("/session").await;
        response.assert_status_ok();
        session_id(&response)
    }

    pub async fn search(&self, session: &HeaderValue, body: Value) -> TestResponse {
        self.server
            .post("/session/search")
            .add_header(session_header(), session.clone())
            .json(&body)
            .await
    }

    pub async fn select(&self, session: &HeaderValue, product_id: &str) -> TestResponse {
        self.server
            .post("/session/selection")
            .add_header(session_header(), session.clone())
            .json(&json!({ "product_id": product_id }))
            .await
    }
}

pub fn session_header() -> HeaderName {
    HeaderName::from_static(SESSION_HEADER)
}

pub fn session_id(response: &TestResponse) -> HeaderValue {
    response.header(SESSION_HEADER)
}
