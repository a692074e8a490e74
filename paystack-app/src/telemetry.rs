//! Logging and tracing setup.
//!
//! - stdout: everything the `RUST_LOG` filter lets through
//! - `{LOG_DIR}/errors.*.log`: WARN and above, rotated daily
//! - OTLP span export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set

use anyhow::Context;
use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::Config;

const DEFAULT_FILTER: &str = "info,paystack_app=debug,paystack_hex=debug,paystack_gateway=debug";

/// Keeps log writers and exporters alive for the lifetime of the process.
pub struct Telemetry {
    _file_guard: WorkerGuard,
    otel_provider: Option<sdktrace::SdkTracerProvider>,
}

impl Telemetry {
    /// Flushes pending spans to the collector.
    pub fn shutdown(self) {
        if let Some(provider) = self.otel_provider {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to flush OTLP spans: {e}");
            }
        }
    }
}

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Endpoint is taken from OTEL_EXPORTER_OTLP_ENDPOINT by the exporter itself.
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .context("failed to create OTLP span exporter")?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("paystack-bridge"), provider))
}

/// Installs the global subscriber.
pub fn init(config: &Config) -> anyhow::Result<Telemetry> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log directory {}", config.log_dir.display()))?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("errors")
        .filename_suffix("log")
        .build(&config.log_dir)
        .context("failed to open error log file")?;
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let (telemetry, otel_provider) = match &config.otlp_endpoint {
        Some(_) => {
            let (tracer, provider) = init_tracer()?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(provider),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer())
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(LevelFilter::WARN),
        )
        .with(telemetry)
        .init();

    Ok(Telemetry {
        _file_guard: file_guard,
        otel_provider,
    })
}
