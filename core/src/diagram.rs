//! The always-produced text fallback for the architecture figure.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub const ARCHITECTURE_DIAGRAM: &str = r#"
    ┌─────────────────────────────────────────────────────────────────┐
    │                    GO-OPTIMIZR DATA FLOW                         │
    ├─────────────────────────────────────────────────────────────────┤
    │                                                                 │
    │   ┌──────────┐     ┌──────────┐     ┌──────────┐               │
    │   │  INPUT   │     │  WORKER  │     │  OUTPUT  │               │
    │   │  DIR     │────►│   POOL   │────►│   DIR    │               │
    │   │ (10 GB)  │     │  (w=3)   │     │ (0.4 GB) │               │
    │   └──────────┘     └──────────┘     └──────────┘               │
    │        │                │                │                      │
    │        │         ┌──────┴──────┐         │                      │
    │        │         │             │         │                      │
    │        ▼         ▼             ▼         ▼                      │
    │   ┌─────────────────────────────────────────────┐              │
    │   │              ANALYTICS COLLECTOR             │              │
    │   │   • Memory snapshots (30s interval)         │              │
    │   │   • Atomic counters (lock-free)             │              │
    │   │   • GC pause tracking                       │              │
    │   └─────────────────────────────────────────────┘              │
    │                          │                                      │
    │                          ▼                                      │
    │                   ┌─────────────┐                               │
    │                   │ summary.json│                               │
    │                   │ (46 fields) │                               │
    │                   └─────────────┘                               │
    │                                                                 │
    └─────────────────────────────────────────────────────────────────┘
    "#;

/// Writes [`ARCHITECTURE_DIAGRAM`] to `path`, truncating any previous file.
pub fn write_diagram(path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(ARCHITECTURE_DIAGRAM.as_bytes())?;
    file.flush()?;
    tracing::info!(path = %path.display(), bytes = ARCHITECTURE_DIAGRAM.len(), "wrote architecture diagram");
    Ok(())
}
