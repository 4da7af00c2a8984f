//! End-to-end relay tests: router, resolver, prompt and inference client
//! against an in-memory graph and a mocked inference server.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use kg_chat_relay::api::{build_router, AppState};
use kg_chat_relay::config::{GraphConfig, InferenceConfig, ServerConfig};
use kg_chat_relay::context::{
    compose, ContextResolver, ContextSource, ResolvedContext, PERSONA_INSTRUCTION,
};
use kg_chat_relay::facts::{seed, Catalog, GraphStore, MemoryStore};
use kg_chat_relay::inference::InferenceClient;
use mockito::Matcher;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    seed(store.as_ref(), &Catalog::builtin()).await.unwrap();
    store
}

fn relay(store: Arc<MemoryStore>, inference_url: String) -> Router {
    let inference = InferenceClient::new(InferenceConfig {
        base_url: inference_url,
        ..Default::default()
    })
    .unwrap();

    let state = AppState {
        resolver: Arc::new(ContextResolver::new(store, &GraphConfig::default())),
        inference: Arc::new(inference),
        graph_name: "chatbot_knowledge".to_string(),
    };
    build_router(state, &ServerConfig::default())
}

async fn post_generate(app: Router, prompt: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "prompt": prompt }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn percentage_prompt_is_grounded_in_math_facts() {
    let catalog = Catalog::builtin();
    let prompt = "What is 20 percentage of 50?";
    let context = ResolvedContext {
        source: ContextSource::Trigger("percentage"),
        facts: vec![
            catalog.topic("mathematics").unwrap().fact.clone(),
            catalog.topic("percentage").unwrap().fact.clone(),
        ],
    };

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Json(json!({
            "model": "tinyllama",
            "prompt": compose(prompt, &context.render()),
            "stream": false
        })))
        .with_status(200)
        .with_body(r#"{"response":"\n20% of 50 is 10.\n"}"#)
        .create_async()
        .await;

    let app = relay(seeded_store().await, server.url());
    let (status, body) = post_generate(app, prompt).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "20% of 50 is 10.", "context_used": true }));
    mock.assert_async().await;
}

#[tokio::test]
async fn capital_of_france_hits_keyword_fallback() {
    let store = seeded_store().await;
    let resolver = ContextResolver::new(store.clone(), &GraphConfig::default());
    let context = resolver.lookup("capital of France").await;
    assert_eq!(context.source, ContextSource::Keyword);
    assert!(!context.is_empty());

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::PartialJson(json!({
            "prompt": compose("capital of France", &context.render())
        })))
        .with_status(200)
        .with_body(r#"{"response":"Paris!"}"#)
        .create_async()
        .await;

    let app = relay(store, server.url());
    let (status, body) = post_generate(app, "capital of France").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "Paris!", "context_used": true }));
    mock.assert_async().await;
}

#[tokio::test]
async fn unmatched_prompt_forwards_persona_only() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::PartialJson(json!({
            "prompt": format!("{}\n\nUser question: zxqv wbrk", PERSONA_INSTRUCTION)
        })))
        .with_status(200)
        .with_body(r#"{"response":"Not sure, sorry!"}"#)
        .create_async()
        .await;

    let app = relay(seeded_store().await, server.url());
    let (status, body) = post_generate(app, "zxqv wbrk").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["context_used"], false);
    mock.assert_async().await;
}

#[tokio::test]
async fn offline_store_still_answers_without_context() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"response":"Hello!"}"#)
        .create_async()
        .await;

    let store = seeded_store().await;
    store.set_offline(true);
    let app = relay(store, server.url());
    let (status, body) = post_generate(app, "hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "Hello!", "context_used": false }));
}

#[tokio::test]
async fn unreachable_inference_is_distinct_from_upstream_error() {
    let app = relay(seeded_store().await, "http://127.0.0.1:1".to_string());
    let (status, body) = post_generate(app, "hello").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");

    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(502)
        .create_async()
        .await;
    let app = relay(seeded_store().await, server.url());
    let (status, body) = post_generate(app, "hello").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn reseeding_keeps_counts_stable() {
    let store = MemoryStore::new();
    let catalog = Catalog::builtin();

    let first = seed(&store, &catalog).await.unwrap();
    let before = store.counts().await.unwrap();
    let second = seed(&store, &catalog).await.unwrap();
    let after = store.counts().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(before, after);
    assert_eq!(after.nodes, catalog.topics.len());
    assert_eq!(after.edges, first.relations);
}
