use axum::body::Body;
use axum::routing::RouterIntoService;
use feedback::app::{AppState, build_router};
use feedback::contact::LogNotifier;
use feedback::store::memory::InMemoryStore;
use std::path::Path;
use std::sync::Arc;

pub type TestApp = RouterIntoService<Body, ()>;

pub fn app_with_static_dir(static_dir: &Path) -> TestApp {
    let state = AppState {
        store: Arc::new(InMemoryStore::new()),
        notifier: Arc::new(LogNotifier),
        static_dir: static_dir.to_path_buf(),
    };
    build_router(state).into_service()
}

pub fn app() -> TestApp {
    app_with_static_dir(Path::new("dist/public"))
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub async fn read_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}
