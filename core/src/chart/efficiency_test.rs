#[cfg(test)]
mod tests {
    use crate::chart::{AxisSide, EfficiencyChart, Rgb, efficiency};
    use crate::data::{MeasurementSeries, OPTIMAL_WORKERS, PEAK_MEMORY_MB};

    fn chart() -> EfficiencyChart {
        EfficiencyChart::build(&MeasurementSeries::benchmark())
    }

    #[test]
    fn one_bar_per_worker_count() {
        let chart = chart();
        assert_eq!(chart.bars.len(), 6);
        let values: Vec<f64> = chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, PEAK_MEMORY_MB.to_vec());
    }

    #[test]
    fn only_the_optimal_bar_is_highlighted() {
        let chart = chart();
        let highlighted: Vec<u32> = chart.bars.iter().filter(|b| b.highlighted).map(|b| b.workers).collect();
        assert_eq!(highlighted, vec![OPTIMAL_WORKERS]);

        let bar = chart.highlighted_bar().expect("highlighted bar");
        assert_eq!(bar.paint.color, Rgb::GREEN);
        assert!(chart.bars.iter().filter(|b| !b.highlighted).all(|b| b.paint != bar.paint));
    }

    #[test]
    fn bars_are_centred_on_worker_counts() {
        let chart = chart();
        let (left, right) = chart.bars[0].span();
        assert!((left - 0.7).abs() < 1e-9);
        assert!((right - 1.3).abs() < 1e-9);
    }

    #[test]
    fn efficiency_line_matches_series() {
        let series = MeasurementSeries::benchmark();
        let chart = EfficiencyChart::build(&series);
        assert_eq!(chart.efficiency, series.efficiency());
        assert_eq!(chart.line_points().len(), 6);

        let optimum = chart.optimum.expect("optimum marker");
        assert_eq!(optimum.at.0, OPTIMAL_WORKERS as f64);
        assert!((optimum.at.1 - 6.08 / 3.19).abs() < 1e-9);
    }

    #[test]
    fn axes_use_fixed_independent_ranges() {
        let chart = chart();
        assert_eq!(chart.memory_axis.range, 0.0..700.0);
        assert_eq!(chart.efficiency_axis.range, 2.5..5.5);
        assert_eq!(chart.x_axis.range, efficiency::X_RANGE);
    }

    #[test]
    fn visible_points_respect_efficiency_range() {
        let chart = chart();
        let visible = chart.visible_line_points();
        assert!(visible.iter().all(|(_, y)| (2.5..5.5).contains(y)));
        assert!(visible.len() <= chart.line_points().len());
    }

    #[test]
    fn legend_merges_both_axes() {
        let chart = chart();
        let labels: Vec<(&str, AxisSide)> = chart.legend.iter().map(|e| (e.label, e.axis)).collect();
        assert_eq!(
            labels,
            vec![
                ("Peak Memory (MB)", AxisSide::Primary),
                ("Efficiency (img/s per 100MB)", AxisSide::Secondary),
            ]
        );
    }

    #[test]
    fn building_twice_is_structurally_equal() {
        assert_eq!(chart(), chart());
    }
}
