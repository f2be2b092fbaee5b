use axum::body::Body;
use axum::routing::RouterIntoService;
use std::sync::Arc;
use zoo_registry::app::{AppState, build_router};
use zoo_registry::store::memory::InMemoryStore;

pub type TestApp = RouterIntoService<Body, ()>;

pub fn app_with_store(store: InMemoryStore) -> TestApp {
    let state = AppState {
        service_name: "zoo-registry-test".to_string(),
        store: Arc::new(store),
    };
    build_router(state).into_service()
}

#[allow(dead_code)]
pub fn seeded_app() -> TestApp {
    app_with_store(InMemoryStore::with_seed_data())
}

#[allow(dead_code)]
pub fn empty_app() -> TestApp {
    app_with_store(InMemoryStore::new())
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
