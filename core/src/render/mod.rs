//! Turning chart models into image files.
//!
//! The plotting backend is optional. Builds without the `render` feature, or
//! hosts where the backend cannot load fonts, report
//! [`RenderError::CapabilityUnavailable`] and the pipeline carries on with the
//! text diagram.

#[cfg(feature = "render")]
mod bitmap;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::chart::{EfficiencyChart, ScalingChart};

#[cfg(feature = "render")]
pub use bitmap::BitmapRenderer;

/// Shown after any chart failure.
pub const REMEDY: &str = "Make sure the plotting backend is available: cargo install optimizr-charts-cli --features render (plotters needs fontconfig and a system font)";

#[derive(Debug)]
pub enum RenderError {
    /// The backend is compiled out or cannot load what it needs to draw.
    CapabilityUnavailable(String),
    Backend {
        path: PathBuf,
        message: String,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderErrorKind {
    CapabilityUnavailable,
    Backend,
    Io,
}

impl RenderError {
    /// Classify a failure reported by the drawing backend.
    ///
    /// Font loading is the only runtime capability the backend needs from the
    /// host, so font errors count as an unavailable capability.
    pub fn from_backend(path: &Path, message: String) -> Self {
        if message.to_ascii_lowercase().contains("font") {
            RenderError::CapabilityUnavailable(message)
        } else {
            RenderError::Backend {
                path: path.to_path_buf(),
                message,
            }
        }
    }

    pub fn kind(&self) -> RenderErrorKind {
        match self {
            RenderError::CapabilityUnavailable(_) => RenderErrorKind::CapabilityUnavailable,
            RenderError::Backend { .. } => RenderErrorKind::Backend,
            RenderError::Io { .. } => RenderErrorKind::Io,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::CapabilityUnavailable(reason) => write!(f, "rendering capability unavailable: {}", reason),
            RenderError::Backend { path, message } => write!(f, "failed to render {}: {}", path.display(), message),
            RenderError::Io { path, source } => write!(f, "failed to prepare {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// What happened to one chart. The pipeline branches on this instead of
/// unwinding.
#[derive(Debug)]
pub enum RenderOutcome {
    Rendered(PathBuf),
    CapabilityUnavailable(RenderError),
    Failed(RenderError),
}

impl RenderOutcome {
    pub fn from_result(path: &Path, result: Result<(), RenderError>) -> Self {
        match result {
            Ok(()) => RenderOutcome::Rendered(path.to_path_buf()),
            Err(err) if err.kind() == RenderErrorKind::CapabilityUnavailable => {
                RenderOutcome::CapabilityUnavailable(err)
            }
            Err(err) => RenderOutcome::Failed(err),
        }
    }
}

pub trait ChartRenderer {
    fn name(&self) -> &'static str;

    fn render_scaling(&self, chart: &ScalingChart, path: &Path) -> Result<(), RenderError>;

    fn render_efficiency(&self, chart: &EfficiencyChart, path: &Path) -> Result<(), RenderError>;
}

/// Stand-in used when the crate is built without a plotting backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableRenderer;

impl UnavailableRenderer {
    fn unavailable() -> RenderError {
        RenderError::CapabilityUnavailable("plotting backend disabled at build time".to_string())
    }
}

impl ChartRenderer for UnavailableRenderer {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn render_scaling(&self, _chart: &ScalingChart, _path: &Path) -> Result<(), RenderError> {
        Err(Self::unavailable())
    }

    fn render_efficiency(&self, _chart: &EfficiencyChart, _path: &Path) -> Result<(), RenderError> {
        Err(Self::unavailable())
    }
}

#[cfg(feature = "render")]
pub fn default_renderer() -> Box<dyn ChartRenderer> {
    Box::new(BitmapRenderer::default())
}

#[cfg(not(feature = "render"))]
pub fn default_renderer() -> Box<dyn ChartRenderer> {
    Box::new(UnavailableRenderer)
}
