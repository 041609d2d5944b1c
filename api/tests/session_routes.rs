mod common;

use axum::http::{HeaderValue, StatusCode};
use common::{NUTELLA_BARCODE, NutriScanTestContext, SESSION_HEADER, session_header, session_id};
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn current_product_requires_a_selection(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;

    ctx.server
        .get("/session/current")
        .add_header(session_header(), session.clone())
        .await
        .assert_status(StatusCode::CONFLICT);

    ctx.server
        .post("/session/current/analysis")
        .add_header(session_header(), session)
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn selection_updates_current_product_and_history(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.search(&session, json!({ "query": "nutella" }))
        .await
        .assert_status_ok();

    let selected = ctx.select(&session, NUTELLA_BARCODE).await;
    selected.assert_status_ok();
    assert_eq!(selected.json::<Value>()["product"]["product_name"], "Nutella");

    ctx.select(&session, "3229820129488").await.assert_status_ok();
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();

    let history = ctx
        .server
        .get("/session/history")
        .add_header(session_header(), session.clone())
        .await;
    history.assert_status_ok();
    assert_eq!(
        history.json::<Value>()["data"],
        json!([NUTELLA_BARCODE, "3229820129488"])
    );

    let current = ctx
        .server
        .get("/session/current")
        .add_header(session_header(), session)
        .await;
    current.assert_status_ok();
    assert_eq!(current.json::<Value>()["product"]["code"], NUTELLA_BARCODE);
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn product_outside_results_is_shown_without_being_recorded(
    ctx: &mut NutriScanTestContext,
) {
    let session = ctx.open_session().await;
    ctx.search(&session, json!({ "query": "introuvable" })).await;

    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();

    let snapshot = ctx
        .server
        .get("/session")
        .add_header(session_header(), session)
        .await;
    let body = snapshot.json::<Value>();
    assert_eq!(body["data"]["current_product"]["code"], NUTELLA_BARCODE);
    assert_eq!(body["data"]["history"], json!([]));
    assert_eq!(body["data"]["selected_products"], json!([]));
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn unknown_product_cannot_be_selected(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;

    ctx.select(&session, "12345678")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn new_search_clears_current_product(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.search(&session, json!({ "query": "nutella" })).await;
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();

    ctx.search(&session, json!({ "query": "nutella" })).await;

    let snapshot = ctx
        .server
        .get("/session")
        .add_header(session_header(), session)
        .await;
    let body = snapshot.json::<Value>();
    assert!(body["data"]["current_product"].is_null());
    assert_eq!(body["data"]["history"], json!([NUTELLA_BARCODE]));
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn analysis_uses_primary_model(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();

    let response = ctx
        .server
        .post("/session/current/analysis")
        .add_header(session_header(), session)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["product_id"], NUTELLA_BARCODE);
    assert_eq!(body["analysis"], "primary-model:512");
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn analysis_failure_is_a_bad_gateway(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();
    ctx.fail_completions();

    ctx.server
        .post("/session/current/analysis")
        .add_header(session_header(), session)
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn alternatives_are_strictly_better_and_sorted(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();

    let response = ctx
        .server
        .get("/session/current/alternatives")
        .add_header(session_header(), session)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let codes: Vec<&str> = body["alternatives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|product| product["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["3760000000001", "3760000000002", "3229820129488"]);
    assert_eq!(body["recommendation"], "primary-model:800");
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn alternatives_respect_max_results(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();

    let response = ctx
        .server
        .get("/session/current/alternatives?max_results=1")
        .add_header(session_header(), session.clone())
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["alternatives"].as_array().unwrap().len(), 1);
    assert_eq!(body["alternatives"][0]["code"], "3760000000002");

    ctx.server
        .get("/session/current/alternatives?max_results=21")
        .add_header(session_header(), session)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn recommendation_falls_back_without_the_model(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();
    ctx.fail_completions();

    let response = ctx
        .server
        .get("/session/current/alternatives")
        .add_header(session_header(), session)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let text = body["recommendation"].as_str().unwrap();
    assert!(text.starts_with("**Alternatives recommandées :**\n\n"));
    assert!(text.contains("• **Purée d'amandes** (Jean Hervé) — Nutri-Score: A"));
    assert!(text.contains("• **Pâte de noisettes** (Marque inconnue) — Nutri-Score: B"));
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn comparison_lifecycle(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.search(&session, json!({ "query": "nutella" })).await;
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();

    ctx.server
        .get("/session/comparison")
        .add_header(session_header(), session.clone())
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    ctx.select(&session, "3229820129488").await.assert_status_ok();

    let chart = ctx
        .server
        .get("/session/comparison")
        .add_header(session_header(), session.clone())
        .await;
    chart.assert_status_ok();
    let body = chart.json::<Value>();
    assert_eq!(body["products"].as_array().unwrap().len(), 2);
    assert_eq!(body["series"][0]["values"], json!([56.3, 29.5]));

    ctx.server
        .delete("/session/comparison/00000000")
        .add_header(session_header(), session.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let removed = ctx
        .server
        .delete(&format!("/session/comparison/{}", NUTELLA_BARCODE))
        .add_header(session_header(), session.clone())
        .await;
    removed.assert_status_ok();
    assert_eq!(removed.json::<Value>()["count"], 1);

    let cleared = ctx
        .server
        .delete("/session/comparison")
        .add_header(session_header(), session)
        .await;
    cleared.assert_status_ok();
    assert_eq!(cleared.json::<Value>()["count"], 0);
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn chat_uses_primary_model_and_records_history(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;

    let reply = ctx
        .server
        .post("/session/chat")
        .add_header(session_header(), session.clone())
        .json(&json!({ "message": "Le sucre est-il mauvais ?" }))
        .await;
    reply.assert_status(StatusCode::CREATED);
    assert_eq!(
        reply.json::<Value>()["data"],
        json!({ "role": "assistant", "content": "primary-model:512" })
    );

    let history = ctx
        .server
        .get("/session/chat")
        .add_header(session_header(), session)
        .await;
    history.assert_status_ok();
    assert_eq!(
        history.json::<Value>()["data"],
        json!([
            { "role": "user", "content": "Le sucre est-il mauvais ?" },
            { "role": "assistant", "content": "primary-model:512" }
        ])
    );
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn failed_chat_is_not_recorded(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.fail_completions();

    ctx.server
        .post("/session/chat")
        .add_header(session_header(), session.clone())
        .json(&json!({ "message": "Bonjour" }))
        .await
        .assert_status(StatusCode::BAD_GATEWAY);

    ctx.server
        .post("/session/chat")
        .add_header(session_header(), session.clone())
        .json(&json!({ "message": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let history = ctx
        .server
        .get("/session/chat")
        .add_header(session_header(), session)
        .await;
    assert_eq!(history.json::<Value>()["data"], json!([]));
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn deleting_without_a_session_opens_none(ctx: &mut NutriScanTestContext) {
    let response = ctx.server.delete("/session").await;

    response.assert_status_ok();
    assert!(!response.headers().contains_key(SESSION_HEADER));

    ctx.server
        .delete("/session")
        .add_header(session_header(), HeaderValue::from_static("not-a-uuid"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(NutriScanTestContext)]
#[tokio::test]
async fn deleted_session_starts_over(ctx: &mut NutriScanTestContext) {
    let session = ctx.open_session().await;
    ctx.select(&session, NUTELLA_BARCODE).await.assert_status_ok();

    ctx.server
        .delete("/session")
        .add_header(session_header(), session.clone())
        .await
        .assert_status_ok();

    let response = ctx
        .server
        .get("/session")
        .add_header(session_header(), session.clone())
        .await;
    response.assert_status_ok();
    assert_ne!(session_id(&response), session);
    assert!(response.json::<Value>()["data"]["current_product"].is_null());
}
