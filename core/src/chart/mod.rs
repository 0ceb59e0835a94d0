//! Renderer-independent descriptions of the documentation charts.
//!
//! Each chart is built from a [`MeasurementSeries`](crate::data::MeasurementSeries)
//! into a plain value that a [`ChartRenderer`](crate::render::ChartRenderer)
//! turns into pixels. Keeping layout decisions here lets tests inspect what
//! will be drawn without touching a raster backend.

pub mod efficiency;
pub mod scaling;

#[cfg(test)]
mod efficiency_test;
#[cfg(test)]
mod scaling_test;

use std::ops::Range;

pub use efficiency::EfficiencyChart;
pub use scaling::ScalingChart;

/// Raster size shared by both charts: 10x6 inches at 150 dpi.
pub const CHART_SIZE: (u32, u32) = (1500, 900);

/// Approximate plotting area inside a [`CHART_SIZE`] canvas once the titles,
/// margins and axis label areas are taken out.
pub const PLOT_AREA_PX: (f64, f64) = (1350.0, 680.0);

/// Line advance of multi-line text as a multiple of its font size.
pub const LINE_SPACING: f64 = 1.3;

const LEGEND_ROW_PX: f64 = 30.0;
const LEGEND_PADDING_PX: f64 = 20.0;
const LEGEND_WIDTH_PX: f64 = 340.0;
/// Average glyph advance relative to the font size.
const GLYPH_WIDTH: f64 = 0.6;

fn data_per_px(range: &Range<f64>, px: f64) -> f64 {
    (range.end - range.start) / px
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const DARK_RED: Rgb = Rgb(139, 0, 0);
    pub const STEEL_BLUE: Rgb = Rgb(70, 130, 180);
}

/// A color with the opacity it is painted at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f64,
}

impl Paint {
    pub const fn solid(color: Rgb) -> Self {
        Self { color, alpha: 1.0 }
    }

    pub const fn translucent(color: Rgb, alpha: f64) -> Self {
        Self { color, alpha }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: &'static str,
    pub range: Range<f64>,
    pub color: Rgb,
}

/// Which y axis a series or legend entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperRight,
    LowerRight,
}

impl LegendPosition {
    /// Corner of the plot covered by a legend with `rows` entries.
    pub fn region(self, x: &Range<f64>, y: &Range<f64>, rows: usize) -> Region {
        let width = LEGEND_WIDTH_PX * data_per_px(x, PLOT_AREA_PX.0);
        let height = (rows as f64 * LEGEND_ROW_PX + LEGEND_PADDING_PX) * data_per_px(y, PLOT_AREA_PX.1);
        let span = match self {
            LegendPosition::UpperRight => (y.end - height)..y.end,
            LegendPosition::LowerRight => y.start..(y.start + height),
        };
        Region {
            x: (x.end - width)..x.end,
            y: span,
        }
    }
}

/// Axis-aligned rectangle in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl Region {
    pub fn overlaps(&self, other: &Region) -> bool {
        self.x.start < other.x.end
            && other.x.start < self.x.end
            && self.y.start < other.y.end
            && other.y.start < self.y.end
    }

    pub fn within(&self, x: &Range<f64>, y: &Range<f64>) -> bool {
        self.x.start >= x.start && self.x.end <= x.end && self.y.start >= y.start && self.y.end <= y.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub paint: Paint,
    pub axis: AxisSide,
}

/// How a band treats the boundary it shares with its neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandBounds {
    /// `[start, end]`
    Closed,
    /// `(start, end]`
    OpenStart,
}

/// A vertical shaded region of the x range.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub start: f64,
    pub end: f64,
    pub bounds: BandBounds,
    pub label: &'static str,
    pub paint: Paint,
}

impl Band {
    pub fn contains(&self, x: f64) -> bool {
        let after_start = match self.bounds {
            BandBounds::Closed => x >= self.start,
            BandBounds::OpenStart => x > self.start,
        };
        after_start && x <= self.end
    }
}

/// A highlighted point drawn on top of its series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub at: (f64, f64),
    pub radius: u32,
    pub paint: Paint,
}

/// Text with an arrow pointing to `target`.
///
/// `text_at` is the bottom-left corner of the last line; earlier lines stack
/// upward from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub target: (f64, f64),
    pub text_at: (f64, f64),
    pub font_size: u32,
    pub color: Rgb,
}

impl Annotation {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn line_advance_px(&self) -> f64 {
        self.font_size as f64 * LINE_SPACING
    }

    /// Box the text covers on a plot spanning `x` by `y`.
    pub fn region(&self, x: &Range<f64>, y: &Range<f64>) -> Region {
        let widest = self.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let width = widest as f64 * self.font_size as f64 * GLYPH_WIDTH * data_per_px(x, PLOT_AREA_PX.0);
        let height = self.lines().count() as f64 * self.line_advance_px() * data_per_px(y, PLOT_AREA_PX.1);
        let (left, bottom) = self.text_at;
        Region {
            x: left..(left + width),
            y: bottom..(bottom + height),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub heading: &'static str,
    pub subtitle: &'static str,
}
