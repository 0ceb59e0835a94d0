#[cfg(test)]
mod tests {
    use crate::chart::{BandBounds, Rgb, ScalingChart, scaling};
    use crate::data::{MeasurementSeries, OPTIMAL_WORKERS, WORKERS};

    fn chart() -> ScalingChart {
        ScalingChart::build(&MeasurementSeries::benchmark())
    }

    #[test]
    fn plots_six_points_in_worker_order() {
        let chart = chart();
        assert_eq!(chart.points.len(), 6);
        assert!(chart.points.windows(2).all(|w| w[0].0 < w[1].0));
        let xs: Vec<u32> = chart.points.iter().map(|p| p.0 as u32).collect();
        assert_eq!(xs, WORKERS.to_vec());
        assert_eq!(chart.x_ticks, WORKERS.to_vec());
    }

    #[test]
    fn marks_the_optimum() {
        let chart = chart();
        let optimum = chart.optimum.expect("optimum marker");
        assert_eq!(optimum.at, (OPTIMAL_WORKERS as f64, 6.08));

        let label = &chart.annotations[0];
        assert_eq!(label.target, optimum.at);
        assert_eq!(label.text_at, (3.5, 6.5));
        assert_eq!(label.color, Rgb::GREEN);
        assert_eq!(label.lines().collect::<Vec<_>>(), vec!["OPTIMAL", "(w=3, 6.08 img/s)"]);
    }

    #[test]
    fn overhead_annotation_points_at_six_workers() {
        let chart = chart();
        let overhead = chart
            .annotations
            .iter()
            .find(|a| a.target.0 == scaling::OVERHEAD_WORKERS as f64)
            .expect("overhead annotation");
        assert_eq!(overhead.target, (6.0, 5.21));
        assert_eq!(overhead.text_at, (6.5, 4.2));
        assert!(overhead.text.contains("overhead exceeds"));
    }

    #[test]
    fn bands_split_at_the_optimum() {
        let chart = chart();
        let benefit = chart.benefit_band();
        let diminishing = chart.diminishing_band();

        assert_eq!((benefit.start, benefit.end), (0.5, 3.0));
        assert_eq!(benefit.bounds, BandBounds::Closed);
        assert_eq!((diminishing.start, diminishing.end), (3.0, 8.5));
        assert_eq!(diminishing.bounds, BandBounds::OpenStart);

        assert!(benefit.contains(1.0));
        assert!(benefit.contains(3.0));
        assert!(!diminishing.contains(3.0));
        assert!(diminishing.contains(8.0));
        assert!(!diminishing.contains(8.6));
        assert!(!benefit.contains(0.4));
    }

    #[test]
    fn every_worker_count_lands_in_exactly_one_band() {
        let chart = chart();
        for w in WORKERS {
            let hits = chart.bands.iter().filter(|b| b.contains(w as f64)).count();
            assert_eq!(hits, 1, "worker count {}", w);
        }
    }

    #[test]
    fn axis_ranges_are_fixed() {
        let chart = chart();
        assert_eq!(chart.x_axis.range, scaling::X_RANGE);
        assert_eq!(chart.y_axis.range, 3.5..7.0);
        assert_eq!(chart.x_axis.label, "Worker Count");
        assert_eq!(chart.y_axis.label, "Throughput (images/second)");
    }

    #[test]
    fn annotations_stay_clear_of_the_legend() {
        let chart = chart();
        let legend = chart.legend_region();
        assert_eq!(legend.y.start, chart.y_axis.range.start);
        assert_eq!(legend.x.end, chart.x_axis.range.end);
        for note in &chart.annotations {
            let text = chart.text_region(note);
            assert!(!text.overlaps(&legend), "{:?} overlaps legend {:?}", note.text, legend);
        }
    }

    #[test]
    fn annotation_text_fits_inside_the_plot() {
        let chart = chart();
        for note in &chart.annotations {
            let text = chart.text_region(note);
            assert_eq!((text.x.start, text.y.start), note.text_at);
            assert!(text.within(&chart.x_axis.range, &chart.y_axis.range), "{:?} leaves the plot", note.text);
        }
    }

    #[test]
    fn building_twice_is_structurally_equal() {
        assert_eq!(chart(), chart());
    }

    #[test]
    fn series_without_optimum_has_no_marker() {
        let series = MeasurementSeries::new(vec![1, 2], vec![4.0, 5.0], vec![100.0, 200.0]).expect("valid");
        let chart = ScalingChart::build(&series);
        assert!(chart.optimum.is_none());
        assert!(chart.annotations.is_empty());
        assert_eq!(chart.points.len(), 2);
    }
}
