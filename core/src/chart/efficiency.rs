use super::{Axis, AxisSide, LegendEntry, LegendPosition, Marker, Paint, Rgb, Title};
use crate::data::{EfficiencyPoint, MeasurementSeries, OPTIMAL_WORKERS};

pub const X_RANGE: std::ops::Range<f64> = 0.5..8.5;
pub const MEMORY_RANGE: std::ops::Range<f64> = 0.0..700.0;
pub const EFFICIENCY_RANGE: std::ops::Range<f64> = 2.5..5.5;

pub const BAR_WIDTH: f64 = 0.6;

const MEMORY_LABEL: &str = "Peak Memory (MB)";
const EFFICIENCY_LABEL: &str = "Efficiency (img/s per 100MB)";

const BAR_PAINT: Paint = Paint::translucent(Rgb::STEEL_BLUE, 0.7);
const OPTIMAL_BAR_PAINT: Paint = Paint::translucent(Rgb::GREEN, 0.9);
const LINE_PAINT: Paint = Paint::solid(Rgb::RED);

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub workers: u32,
    pub value: f64,
    pub highlighted: bool,
    pub paint: Paint,
}

impl Bar {
    /// Horizontal extent of the bar, centred on its worker count.
    pub fn span(&self) -> (f64, f64) {
        let center = self.workers as f64;
        (center - BAR_WIDTH / 2.0, center + BAR_WIDTH / 2.0)
    }
}

/// Peak memory bars on the primary axis, efficiency line on a secondary
/// axis sharing the same worker-count x range.
#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyChart {
    pub title: Title,
    pub x_axis: Axis,
    pub memory_axis: Axis,
    pub efficiency_axis: Axis,
    pub bars: Vec<Bar>,
    pub efficiency: Vec<EfficiencyPoint>,
    pub line_paint: Paint,
    pub optimum: Option<Marker>,
    pub legend: Vec<LegendEntry>,
    pub legend_position: LegendPosition,
}

impl EfficiencyChart {
    pub fn build(series: &MeasurementSeries) -> Self {
        let bars: Vec<Bar> = series
            .memory_points()
            .into_iter()
            .map(|(workers, value)| {
                let highlighted = workers == OPTIMAL_WORKERS;
                Bar {
                    workers,
                    value,
                    highlighted,
                    paint: if highlighted { OPTIMAL_BAR_PAINT } else { BAR_PAINT },
                }
            })
            .collect();
        let efficiency = series.efficiency();
        let optimum = efficiency
            .iter()
            .find(|p| p.workers == OPTIMAL_WORKERS)
            .map(|p| Marker {
                at: (p.workers as f64, p.value),
                radius: 14,
                paint: Paint::solid(Rgb::GREEN),
            });

        tracing::debug!(
            bars = bars.len(),
            points = efficiency.len(),
            "built memory efficiency chart model"
        );

        // Primary entries first, then the secondary axis, as one legend box.
        let legend = vec![
            LegendEntry {
                label: MEMORY_LABEL,
                paint: BAR_PAINT,
                axis: AxisSide::Primary,
            },
            LegendEntry {
                label: EFFICIENCY_LABEL,
                paint: LINE_PAINT,
                axis: AxisSide::Secondary,
            },
        ];

        Self {
            title: Title {
                heading: "Memory Usage vs Throughput Efficiency",
                subtitle: "w=3 Maximizes Both",
            },
            x_axis: Axis {
                label: "Worker Count",
                range: X_RANGE,
                color: Rgb::BLACK,
            },
            memory_axis: Axis {
                label: MEMORY_LABEL,
                range: MEMORY_RANGE,
                color: Rgb::STEEL_BLUE,
            },
            efficiency_axis: Axis {
                label: EFFICIENCY_LABEL,
                range: EFFICIENCY_RANGE,
                color: Rgb::DARK_RED,
            },
            bars,
            efficiency,
            line_paint: LINE_PAINT,
            optimum,
            legend,
            legend_position: LegendPosition::UpperRight,
        }
    }

    pub fn line_points(&self) -> Vec<(f64, f64)> {
        self.efficiency.iter().map(|p| (p.workers as f64, p.value)).collect()
    }

    /// Line points that fall inside the fixed efficiency range.
    pub fn visible_line_points(&self) -> Vec<(f64, f64)> {
        self.line_points()
            .into_iter()
            .filter(|(_, y)| self.efficiency_axis.range.contains(y))
            .collect()
    }

    pub fn highlighted_bar(&self) -> Option<&Bar> {
        self.bars.iter().find(|b| b.highlighted)
    }
}
