//! Observability wiring for the feedback service.
//!
//! # Purpose
//! Initializes tracing, W3C trace-context propagation, an optional OTLP span
//! exporter, and the Prometheus metrics endpoint.
//!
//! # Notes
//! - Initialization is guarded by `OnceLock` to keep startup idempotent in tests.
//! - Spans are only exported when `OTEL_EXPORTER_OTLP_ENDPOINT` is set; local
//!   runs log to stdout only.
use metrics_exporter_prometheus::PrometheusBuilder;
use metrics_exporter_prometheus::PrometheusHandle;
use opentelemetry::KeyValue;
use opentelemetry::global;
use opentelemetry::propagation::Extractor;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const OTLP_ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static OBS_INIT: OnceLock<()> = OnceLock::new();
static PROPAGATOR_INIT: OnceLock<()> = OnceLock::new();

pub fn init_observability(service_name: &str) -> anyhow::Result<PrometheusHandle> {
    OBS_INIT.get_or_init(|| {
        install_propagator();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer();
        let registry = tracing_subscriber::registry().with(filter).with(fmt_layer);
        if let Some(provider) = build_tracer_provider(service_name) {
            let tracer = provider.tracer(service_name.to_string());
            global::set_tracer_provider(provider);
            let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
            let _ = registry.with(otel_layer).try_init();
        } else {
            let _ = registry.try_init();
        }
    });

    install_metrics_recorder()
}

fn install_propagator() {
    PROPAGATOR_INIT.get_or_init(|| {
        global::set_text_map_propagator(
            opentelemetry_sdk::propagation::TraceContextPropagator::new(),
        );
    });
}

fn build_tracer_provider(
    service_name: &str,
) -> Option<opentelemetry_sdk::trace::SdkTracerProvider> {
    std::env::var(OTLP_ENDPOINT_ENV).ok()?;
    let resource = Resource::builder_empty()
        .with_attributes(resource_attributes(service_name))
        .build();
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .ok()?;
    Some(
        opentelemetry_sdk::trace::SdkTracerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(resource)
            .build(),
    )
}

fn resource_attributes(service_name: &str) -> Vec<KeyValue> {
    let mut attrs = vec![KeyValue::new("service.name", service_name.to_string())];
    if let Ok(value) =
        std::env::var("FEEDBACK_SERVICE_INSTANCE_ID").or_else(|_| std::env::var("HOSTNAME"))
    {
        attrs.push(KeyValue::new("service.instance.id", value));
    }
    if let Ok(value) = std::env::var("DEPLOYMENT_ENVIRONMENT") {
        attrs.push(KeyValue::new("deployment.environment", value));
    }
    attrs
}

pub fn trace_context_from_headers(headers: &axum::http::HeaderMap) -> opentelemetry::Context {
    install_propagator();
    global::get_text_map_propagator(|prop| prop.extract(&HeaderMapExtractor(headers)))
}

struct HeaderMapExtractor<'a>(&'a axum::http::HeaderMap);

impl Extractor for HeaderMapExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|name| name.as_str()).collect()
    }
}

pub async fn serve_metrics(handle: PrometheusHandle, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_metrics_with_listener(handle, listener, std::future::pending()).await
}

async fn serve_metrics_with_listener<F>(
    handle: PrometheusHandle,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = axum::Router::new().route(
        "/metrics",
        axum::routing::get(move || async move { handle.render() }),
    );
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
}

fn install_metrics_recorder() -> anyhow::Result<PrometheusHandle> {
    if let Some(handle) = METRICS_HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = METRICS_HANDLE.set(handle.clone());
    Ok(handle)
}
