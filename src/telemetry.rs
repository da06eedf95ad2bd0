use opentelemetry::{global, trace::TracerProvider};
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::Config;
use crate::otel::{self, Providers, SERVICE_NAME};

/// Install the tracing subscriber. OTLP export is only wired up when an
/// endpoint is configured; the returned providers must be shut down on exit.
pub fn init_telemetry(config: &Config) -> anyhow::Result<Option<Providers>> {
    let providers = config
        .otlp_endpoint
        .as_deref()
        .map(otel::init_providers)
        .transpose()?;

    let otel_layer = providers
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer.tracer(SERVICE_NAME)));
    let fmt_layer = tracing_subscriber::fmt::layer().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    if let Some(p) = &providers {
        global::set_tracer_provider(p.tracer.clone());
        global::set_meter_provider(p.meter.clone());
        tracing::info!(endpoint = ?config.otlp_endpoint, "OTLP export enabled");
    }

    Ok(providers)
}
