//! Workshop feedback HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, the feedback store, the contact notifier, and the HTTP
//! router, then serves the API and static bundle until interrupted.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
use feedback::app::{AppState, build_router};
use feedback::config::FeedbackConfig;
use feedback::contact::LogNotifier;
use feedback::observability;
use feedback::store::memory::InMemoryStore;
use std::future::Future;
use std::sync::Arc;

const SERVICE_NAME: &str = "workshop-feedback";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FeedbackConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: FeedbackConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability(SERVICE_NAME)?;
    let state = build_state(&config);
    tracing::info!(
        backend = state.store.backend_name(),
        notifier = state.notifier.notifier_name(),
        static_dir = %config.static_dir.display(),
        "feedback service configured"
    );
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);
    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "feedback service listening");
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {
            tracing::info!("shutdown requested");
        }
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: &FeedbackConfig) -> AppState {
    AppState {
        store: Arc::new(InMemoryStore::new()),
        notifier: Arc::new(LogNotifier),
        static_dir: config.static_dir.clone(),
    }
}
