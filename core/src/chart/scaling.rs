use super::{Annotation, Axis, Band, BandBounds, LegendPosition, Marker, Paint, Region, Rgb, Title};
use crate::data::{MeasurementSeries, OPTIMAL_WORKERS};

pub const X_RANGE: std::ops::Range<f64> = 0.5..8.5;
pub const Y_RANGE: std::ops::Range<f64> = 3.5..7.0;

/// Worker count whose throughput the overhead annotation points at.
pub const OVERHEAD_WORKERS: u32 = 6;

/// Throughput against worker count, with the optimum called out and the
/// x range split into the benefit and diminishing-returns regions.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingChart {
    pub title: Title,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_ticks: Vec<u32>,
    pub line_label: &'static str,
    pub line_paint: Paint,
    pub points: Vec<(f64, f64)>,
    pub optimum: Option<Marker>,
    pub bands: [Band; 2],
    pub annotations: Vec<Annotation>,
    pub legend: LegendPosition,
}

impl ScalingChart {
    pub fn build(series: &MeasurementSeries) -> Self {
        let points: Vec<(f64, f64)> = series
            .throughput_points()
            .into_iter()
            .map(|(w, t)| (w as f64, t))
            .collect();
        let optimum_at = point_for(series, OPTIMAL_WORKERS);
        let split = OPTIMAL_WORKERS as f64;

        let mut annotations = Vec::with_capacity(2);
        if let Some(at) = optimum_at {
            annotations.push(Annotation {
                text: format!("OPTIMAL\n(w={}, {:.2} img/s)", OPTIMAL_WORKERS, at.1),
                target: at,
                text_at: (at.0 + 0.5, 6.5),
                font_size: 22,
                color: Rgb::GREEN,
            });
        }
        if let Some(target) = point_for(series, OVERHEAD_WORKERS) {
            annotations.push(Annotation {
                text: "Context switch\noverhead exceeds\nI/O overlap benefit".to_string(),
                target,
                text_at: (target.0 + 0.5, 4.2),
                font_size: 18,
                color: Rgb::DARK_RED,
            });
        }

        tracing::debug!(points = points.len(), optimum = ?optimum_at, "built scaling chart model");

        Self {
            title: Title {
                heading: "Worker Scaling on 1-Core System",
                subtitle: "Diminishing Returns Beyond w=3",
            },
            x_axis: Axis {
                label: "Worker Count",
                range: X_RANGE,
                color: Rgb::BLACK,
            },
            y_axis: Axis {
                label: "Throughput (images/second)",
                range: Y_RANGE,
                color: Rgb::BLACK,
            },
            x_ticks: series.workers().to_vec(),
            line_label: "Measured Throughput",
            line_paint: Paint::solid(Rgb::BLUE),
            points,
            optimum: optimum_at.map(|at| Marker {
                at,
                radius: 14,
                paint: Paint::solid(Rgb::GREEN),
            }),
            bands: [
                Band {
                    start: X_RANGE.start,
                    end: split,
                    bounds: BandBounds::Closed,
                    label: "I/O Overlap Benefit",
                    paint: Paint::translucent(Rgb::GREEN, 0.15),
                },
                Band {
                    start: split,
                    end: X_RANGE.end,
                    bounds: BandBounds::OpenStart,
                    label: "Diminishing Returns Zone",
                    paint: Paint::translucent(Rgb::RED, 0.15),
                },
            ],
            annotations,
            legend: LegendPosition::LowerRight,
        }
    }

    pub fn benefit_band(&self) -> &Band {
        &self.bands[0]
    }

    pub fn diminishing_band(&self) -> &Band {
        &self.bands[1]
    }

    /// One legend row per band plus the measured line.
    pub fn legend_region(&self) -> Region {
        self.legend
            .region(&self.x_axis.range, &self.y_axis.range, self.bands.len() + 1)
    }

    pub fn text_region(&self, note: &Annotation) -> Region {
        note.region(&self.x_axis.range, &self.y_axis.range)
    }
}

fn point_for(series: &MeasurementSeries, workers: u32) -> Option<(f64, f64)> {
    series
        .index_of(workers)
        .map(|idx| (workers as f64, series.throughput()[idx]))
}
