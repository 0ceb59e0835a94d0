use clap::Parser;
use optimizr_charts_core::{pipeline, render};
use tracing_subscriber::EnvFilter;


const TRACE_ENV: &str = "OPTIMIZR_TRACE";
const DEFAULT_TRACE_FILTER: &str = "optimizr_charts_core=info,optimizr_charts=info";

#[derive(Debug, Parser)]
#[command(
    name = "optimizr-charts",
    author,
    version,
    about = "Regenerate the go-optimizr documentation charts",
    long_about = "Writes docs/worker-scaling.png, docs/memory-efficiency.png and docs/architecture.txt \
                  relative to the current directory. Chart failures are reported and skipped; \
                  the text diagram is always written."
)]
struct CliArgs {}

/// What `OPTIMIZR_TRACE` asks for.
#[derive(Debug, PartialEq, Eq)]
enum TraceRequest {
    Off,
    /// Bare toggle: `RUST_LOG` if set, else the default filter.
    On,
    Filter(String),
}

impl TraceRequest {
    fn parse(raw: &str) -> Self {
        let value = raw.trim();
        match value.to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "off" => TraceRequest::Off,
            "1" | "true" | "on" => TraceRequest::On,
            _ => TraceRequest::Filter(value.to_string()),
        }
    }
}

/// Logs go to stderr so stdout keeps only the status lines.
fn maybe_init_tracing() {
    let Ok(raw) = std::env::var(TRACE_ENV) else {
        return;
    };
    let expr = match TraceRequest::parse(&raw) {
        TraceRequest::Off => return,
        TraceRequest::On => std::env::var("RUST_LOG").ok(),
        TraceRequest::Filter(expr) => Some(expr),
    };
    let filter = expr
        .and_then(|expr| EnvFilter::try_new(expr).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TRACE_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();
    let CliArgs {} = CliArgs::parse();

    let renderer = render::default_renderer();
    let docs_dir = pipeline::default_docs_dir();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let report = pipeline::run(&docs_dir, renderer.as_ref(), &mut out)?;
    tracing::debug!(
        artifacts = report.artifacts.len(),
        chart_fault = report.chart_fault.is_some(),
        "documentation assets regenerated"
    );
    Ok(())
}
