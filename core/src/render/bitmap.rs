use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ChartRenderer, RenderError};
use crate::chart::{
    Annotation, AxisSide, CHART_SIZE, EfficiencyChart, LegendPosition, Paint, Rgb, ScalingChart, Title,
};

type DrawResult = Result<(), Box<dyn Error>>;

const FONT: &str = "sans-serif";

/// PNG renderer backed by plotters' bitmap backend.
#[derive(Debug, Clone, Copy)]
pub struct BitmapRenderer {
    size: (u32, u32),
}

impl BitmapRenderer {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { size: (width, height) }
    }
}

impl Default for BitmapRenderer {
    fn default() -> Self {
        Self { size: CHART_SIZE }
    }
}

impl ChartRenderer for BitmapRenderer {
    fn name(&self) -> &'static str {
        "plotters-bitmap"
    }

    fn render_scaling(&self, chart: &ScalingChart, path: &Path) -> Result<(), RenderError> {
        ensure_parent(path)?;
        draw_scaling(chart, path, self.size).map_err(|err| RenderError::from_backend(path, err.to_string()))?;
        tracing::info!(path = %path.display(), "rendered worker scaling chart");
        Ok(())
    }

    fn render_efficiency(&self, chart: &EfficiencyChart, path: &Path) -> Result<(), RenderError> {
        ensure_parent(path)?;
        draw_efficiency(chart, path, self.size).map_err(|err| RenderError::from_backend(path, err.to_string()))?;
        tracing::info!(path = %path.display(), "rendered memory efficiency chart");
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn fill(paint: Paint) -> ShapeStyle {
    rgb(paint.color).mix(paint.alpha).filled()
}

fn stroke(paint: Paint, width: u32) -> ShapeStyle {
    rgb(paint.color).mix(paint.alpha).stroke_width(width)
}

fn legend_position(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

/// Draws the two-line title and returns the area left below it.
fn titled_area<'a>(
    root: &DrawingArea<BitMapBackend<'a>, Shift>,
    title: &Title,
) -> Result<DrawingArea<BitMapBackend<'a>, Shift>, Box<dyn Error>> {
    let heading = root.titled(title.heading, (FONT, 36).into_font())?;
    let body = heading.titled(title.subtitle, (FONT, 28).into_font())?;
    Ok(body)
}

fn annotation_font(note: &Annotation) -> TextStyle<'static> {
    (FONT, note.font_size).into_font().color(&rgb(note.color))
}

/// Pixel offset of each line from `text_at`, last line resting on it.
pub(super) fn line_offsets(note: &Annotation) -> Vec<(i32, i32)> {
    let count = note.lines().count();
    let advance = note.line_advance_px();
    (0..count)
        .map(|i| (6, -((count - i) as f64 * advance).round() as i32))
        .collect()
}

fn draw_scaling(chart: &ScalingChart, path: &Path, size: (u32, u32)) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let area = titled_area(&root, &chart.title)?;

    let x_range = chart.x_axis.range.clone();
    let y_range = chart.y_axis.range.clone();
    let mut ctx = ChartBuilder::on(&area)
        .margin(24)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(x_range, y_range.clone())?;

    let ticks = chart.x_ticks.clone();
    let x_formatter = |x: &f64| {
        let rounded = x.round();
        if (x - rounded).abs() < 1e-6 && ticks.contains(&(rounded as u32)) {
            format!("{}", rounded as u32)
        } else {
            String::new()
        }
    };
    ctx.configure_mesh()
        .x_desc(chart.x_axis.label)
        .y_desc(chart.y_axis.label)
        .x_labels(10)
        .x_label_formatter(&x_formatter)
        .axis_desc_style((FONT, 28).into_font())
        .label_style((FONT, 22).into_font())
        .draw()?;

    for band in &chart.bands {
        let style = fill(band.paint);
        ctx.draw_series(std::iter::once(Rectangle::new(
            [(band.start, y_range.start), (band.end, y_range.end)],
            style,
        )))?
        .label(band.label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 8), (x + 24, y + 8)], style));
    }

    let line = stroke(chart.line_paint, 4);
    ctx.draw_series(LineSeries::new(chart.points.iter().copied(), line))?
        .label(chart.line_label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], line));
    let dot = fill(chart.line_paint);
    ctx.draw_series(chart.points.iter().map(|&p| Circle::new(p, 10, dot)))?;

    if let Some(marker) = chart.optimum {
        ctx.draw_series(std::iter::once(Circle::new(marker.at, marker.radius, fill(marker.paint))))?;
        ctx.draw_series(std::iter::once(Circle::new(
            marker.at,
            marker.radius,
            WHITE.stroke_width(2),
        )))?;
    }

    for note in &chart.annotations {
        let ink = rgb(note.color);
        ctx.draw_series(std::iter::once(PathElement::new(
            vec![note.text_at, note.target],
            ink.stroke_width(2),
        )))?;
        ctx.draw_series(std::iter::once(Circle::new(note.target, 4, ink.filled())))?;
        let font = annotation_font(note);
        ctx.draw_series(note.lines().zip(line_offsets(note)).map(|(line, offset)| {
            EmptyElement::at(note.text_at) + Text::new(line.to_string(), offset, font.clone())
        }))?;
    }

    ctx.configure_series_labels()
        .position(legend_position(chart.legend))
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font((FONT, 20).into_font())
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_efficiency(chart: &EfficiencyChart, path: &Path, size: (u32, u32)) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let area = titled_area(&root, &chart.title)?;

    let x_range = chart.x_axis.range.clone();
    let memory_range = chart.memory_axis.range.clone();
    let efficiency_range = chart.efficiency_axis.range.clone();
    let mut ctx = ChartBuilder::on(&area)
        .margin(24)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .right_y_label_area_size(100)
        .build_cartesian_2d(x_range.clone(), memory_range.clone())?
        .set_secondary_coord(x_range, efficiency_range.clone());

    let x_formatter = |x: &f64| {
        let rounded = x.round();
        if (x - rounded).abs() < 1e-6 && chart.bars.iter().any(|b| b.workers == rounded as u32) {
            format!("{}", rounded as u32)
        } else {
            String::new()
        }
    };
    let memory_ink = rgb(chart.memory_axis.color);
    let efficiency_ink = rgb(chart.efficiency_axis.color);
    ctx.configure_mesh()
        .x_desc(chart.x_axis.label)
        .y_desc(chart.memory_axis.label)
        .x_labels(10)
        .x_label_formatter(&x_formatter)
        .axis_desc_style((FONT, 28).into_font())
        .x_label_style((FONT, 22).into_font())
        .y_label_style((FONT, 22).into_font().color(&memory_ink))
        .draw()?;
    ctx.configure_secondary_axes()
        .y_desc(chart.efficiency_axis.label)
        .axis_desc_style((FONT, 28).into_font().color(&efficiency_ink))
        .label_style((FONT, 22).into_font().color(&efficiency_ink))
        .draw()?;

    let label_for = |side: AxisSide| {
        chart
            .legend
            .iter()
            .find(|entry| entry.axis == side)
            .map(|entry| (entry.label, entry.paint))
    };

    let baseline = memory_range.start;
    let bars = ctx.draw_series(chart.bars.iter().map(|bar| {
        let (left, right) = bar.span();
        Rectangle::new([(left, baseline), (right, bar.value)], fill(bar.paint))
    }))?;
    if let Some((label, paint)) = label_for(AxisSide::Primary) {
        let style = fill(paint);
        bars.label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 8), (x + 24, y + 8)], style));
    }

    // The efficiency range is fixed; anything outside it stays off the plot.
    let visible = chart.visible_line_points();
    let line = stroke(chart.line_paint, 4);
    let series = ctx.draw_secondary_series(LineSeries::new(visible.iter().copied(), line))?;
    if let Some((label, paint)) = label_for(AxisSide::Secondary) {
        let style = stroke(paint, 4);
        series
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], style));
    }
    let dot = fill(chart.line_paint);
    ctx.draw_secondary_series(visible.iter().map(|&p| Circle::new(p, 9, dot)))?;

    if let Some(marker) = chart.optimum
        && efficiency_range.contains(&marker.at.1)
    {
        ctx.draw_secondary_series(std::iter::once(Circle::new(marker.at, marker.radius, fill(marker.paint))))?;
    }

    ctx.configure_series_labels()
        .position(legend_position(chart.legend_position))
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font((FONT, 20).into_font())
        .draw()?;

    root.present()?;
    Ok(())
}
