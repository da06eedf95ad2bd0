use anyhow::Context;
use opentelemetry_otlp::{MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, metrics::SdkMeterProvider, trace::SdkTracerProvider};

pub const SERVICE_NAME: &str = "people-api";

pub struct Providers {
    pub tracer: SdkTracerProvider,
    pub meter: SdkMeterProvider,
}

impl Providers {
    pub fn shutdown(&self) {
        if let Err(err) = self.tracer.shutdown() {
            tracing::warn!(error = %err, "tracer provider shutdown failed");
        }
        if let Err(err) = self.meter.shutdown() {
            tracing::warn!(error = %err, "meter provider shutdown failed");
        }
    }
}

pub fn init_providers(endpoint: &str) -> anyhow::Result<Providers> {
    let resource = Resource::builder().with_service_name(SERVICE_NAME).build();

    let span_exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .context("Failed to create OTLP span exporter")?;

    let tracer = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();

    let metric_exporter = MetricExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .context("Failed to create OTLP metric exporter")?;

    let meter = SdkMeterProvider::builder()
        .with_periodic_exporter(metric_exporter)
        .with_resource(resource)
        .build();

    Ok(Providers { tracer, meter })
}
