//! Regenerates every documentation asset in one pass.
//!
//! Chart failures are reported and swallowed; only a failure to write the
//! text diagram reaches the caller. Console output is best-effort as well.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::chart::{EfficiencyChart, ScalingChart};
use crate::data::MeasurementSeries;
use crate::diagram::write_diagram;
use crate::render::{ChartRenderer, REMEDY, RenderError, RenderOutcome};

pub const DOCS_DIR: &str = "docs";
pub const DIAGRAM_FILE: &str = "architecture.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    WorkerScaling,
    MemoryEfficiency,
}

impl ChartKind {
    /// Render order.
    pub const ALL: [ChartKind; 2] = [ChartKind::WorkerScaling, ChartKind::MemoryEfficiency];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::WorkerScaling => "worker-scaling.png",
            ChartKind::MemoryEfficiency => "memory-efficiency.png",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            ChartKind::WorkerScaling => "Worker Scaling",
            ChartKind::MemoryEfficiency => "Memory Efficiency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Chart(ChartKind),
    Diagram,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub artifacts: Vec<Artifact>,
    /// First chart failure; later charts are not attempted after it.
    pub chart_fault: Option<RenderError>,
}

impl RunReport {
    pub fn charts_rendered(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| matches!(a.kind, ArtifactKind::Chart(_)))
            .count()
    }

    pub fn path_of(&self, kind: ArtifactKind) -> Option<&Path> {
        self.artifacts.iter().find(|a| a.kind == kind).map(|a| a.path.as_path())
    }
}

pub fn default_docs_dir() -> PathBuf {
    PathBuf::from(DOCS_DIR)
}

/// Markdown snippet that embeds `kind` in the project README.
pub fn embed_snippet(kind: ChartKind) -> String {
    format!("![{}](./{}/{})", kind.alt_text(), DOCS_DIR, kind.file_name())
}

pub fn run(docs_dir: &Path, renderer: &dyn ChartRenderer, out: &mut dyn Write) -> anyhow::Result<RunReport> {
    let _span = tracing::info_span!("pipeline", docs = %docs_dir.display(), renderer = renderer.name()).entered();
    say(out, format_args!("Generating go-optimizr documentation charts...\n"));

    let series = MeasurementSeries::benchmark();
    let mut report = RunReport::default();

    for kind in ChartKind::ALL {
        let path = docs_dir.join(kind.file_name());
        let result = prepare_docs_dir(docs_dir).and_then(|()| render_chart(kind, &series, renderer, &path));
        match RenderOutcome::from_result(&path, result) {
            RenderOutcome::Rendered(path) => {
                say(out, format_args!("Created: {}", path.display()));
                report.artifacts.push(Artifact {
                    kind: ArtifactKind::Chart(kind),
                    path,
                });
            }
            RenderOutcome::CapabilityUnavailable(err) => {
                tracing::warn!(chart = ?kind, error = %err, "plotting capability unavailable, skipping charts");
                report.chart_fault = Some(err);
                break;
            }
            RenderOutcome::Failed(err) => {
                tracing::warn!(chart = ?kind, error = %err, "chart rendering failed, skipping remaining charts");
                report.chart_fault = Some(err);
                break;
            }
        }
    }

    if let Some(err) = &report.chart_fault {
        say(out, format_args!("Error generating charts: {}", err));
        say(out, format_args!("{}", REMEDY));
    }

    fs::create_dir_all(docs_dir).with_context(|| format!("create {}", docs_dir.display()))?;
    let diagram_path = docs_dir.join(DIAGRAM_FILE);
    write_diagram(&diagram_path).with_context(|| format!("write {}", diagram_path.display()))?;
    say(out, format_args!("Created: {} (ASCII fallback)", diagram_path.display()));
    report.artifacts.push(Artifact {
        kind: ArtifactKind::Diagram,
        path: diagram_path,
    });

    write_summary(&report, out);
    Ok(report)
}

fn prepare_docs_dir(docs_dir: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(docs_dir).map_err(|source| RenderError::Io {
        path: docs_dir.to_path_buf(),
        source,
    })
}

fn render_chart(
    kind: ChartKind,
    series: &MeasurementSeries,
    renderer: &dyn ChartRenderer,
    path: &Path,
) -> Result<(), RenderError> {
    match kind {
        ChartKind::WorkerScaling => renderer.render_scaling(&ScalingChart::build(series), path),
        ChartKind::MemoryEfficiency => renderer.render_efficiency(&EfficiencyChart::build(series), path),
    }
}

fn write_summary(report: &RunReport, out: &mut dyn Write) {
    say(out, format_args!("\nDone! Produced {} artifact(s):", report.artifacts.len()));
    for artifact in &report.artifacts {
        say(out, format_args!("  - {}", artifact.path.display()));
    }
    say(out, format_args!("Add these to your README:"));
    for kind in ChartKind::ALL {
        say(out, format_args!("  {}", embed_snippet(kind)));
    }
}

/// Writes one status line. A broken console never stops the run.
fn say(out: &mut dyn Write, line: fmt::Arguments<'_>) {
    if let Err(err) = writeln!(out, "{}", line) {
        tracing::warn!(error = %err, "console write failed");
    }
}
