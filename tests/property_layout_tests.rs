use healthchart::charts::{
    ChartStyle, draw_bar_chart, draw_line_chart, draw_pie_chart, draw_scatter_chart,
};
use healthchart::core::{
    Bounds, CategoryDistribution, DataPoint, LayoutConfig, Series, layout_bars, layout_line,
    layout_pie, layout_scatter, scale,
};
use healthchart::render::RecordingSurface;
use healthchart::{ChartEngine, LineChartConfig, LineChartEngine};
use proptest::prelude::*;

fn labelled(values: Vec<f64>) -> Series {
    let labels: Vec<String> = (0..values.len()).map(|i| format!("c{i}")).collect();
    Series::new(values, labels)
}

proptest! {
    #[test]
    fn category_layouts_emit_one_finite_mark_per_value(
        values in prop::collection::vec(0.0f64..10_000.0, 1..40),
        width in 200.0f64..2_000.0,
        height in 150.0f64..1_500.0
    ) {
        let bounds = Bounds::from_size(width, height);
        let series = labelled(values);
        let config = LayoutConfig::default();

        let bars = layout_bars(bounds, &series, &config).expect("bars");
        prop_assert_eq!(bars.bars.len(), series.len());
        let bars_finite = bars.bars.iter().all(|bar| {
            bar.x.is_finite() && bar.y.is_finite() && bar.height.is_finite() && bar.height >= 0.0
        });
        prop_assert!(bars_finite);

        let line = layout_line(bounds, &series, &config).expect("line");
        prop_assert_eq!(line.vertices.len(), series.len());
        let vertices_finite = line.vertices.iter().all(|vertex| vertex.is_finite());
        prop_assert!(vertices_finite);

        let scatter = layout_scatter(bounds, &series, &config).expect("scatter");
        prop_assert_eq!(scatter.points.len(), series.len());
        let points_finite = scatter.points.iter().all(|point| point.is_finite());
        prop_assert!(points_finite);
    }

    #[test]
    fn marks_stay_inside_the_plot_area(
        values in prop::collection::vec(-10_000.0f64..10_000.0, 1..40)
    ) {
        let bounds = Bounds::from_size(800.0, 500.0);
        let series = labelled(values);
        let layout = layout_bars(bounds, &series, &LayoutConfig::default()).expect("bars");

        for bar in &layout.bars {
            prop_assert!(bar.x >= layout.plot.left - 1e-9);
            prop_assert!(bar.x + bar.width <= layout.plot.right() + 1e-9);
            prop_assert!(bar.y >= layout.plot.top - 1e-9);
            prop_assert!(bar.y + bar.height <= layout.plot.baseline() + 1e-9);
        }
        let ticks_ascending = layout
            .axis
            .ticks
            .windows(2)
            .all(|pair| pair[0].value <= pair[1].value);
        prop_assert!(ticks_ascending);
    }

    #[test]
    fn scale_is_monotonic_in_both_directions(
        domain_min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let domain_max = domain_min + span;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let v_low = domain_min + low * span;
        let v_high = domain_min + high * span;

        prop_assert!(
            scale(v_low, domain_min, domain_max, 0.0, 500.0)
                <= scale(v_high, domain_min, domain_max, 0.0, 500.0)
        );
        prop_assert!(
            scale(v_low, domain_min, domain_max, 500.0, 0.0)
                >= scale(v_high, domain_min, domain_max, 500.0, 0.0)
        );
    }

    #[test]
    fn pie_sweeps_cover_the_full_circle(
        values in prop::collection::vec(0.01f64..10_000.0, 1..20)
    ) {
        let distribution: CategoryDistribution = values
            .iter()
            .enumerate()
            .map(|(i, value)| (format!("slice {i}"), *value))
            .collect();
        let layout = layout_pie(Bounds::from_size(900.0, 600.0), &distribution).expect("pie");

        let total_sweep: f64 = layout.slices.iter().map(|slice| slice.sweep_angle_deg).sum();
        prop_assert!((total_sweep - 360.0).abs() <= 1e-3);
        let percentages_bounded = layout.slices.iter().all(|slice| slice.percentage <= 100);
        prop_assert!(percentages_bounded);
    }

    #[test]
    fn mismatched_labels_never_draw(
        values in prop::collection::vec(0.0f64..100.0, 0..12),
        extra_labels in 1usize..4
    ) {
        let labels: Vec<String> = (0..values.len() + extra_labels)
            .map(|i| format!("c{i}"))
            .collect();
        let series = Series::new(values, labels);
        let bounds = Bounds::from_size(800.0, 500.0);
        let style = ChartStyle::default();
        let config = LayoutConfig::default();

        let mut surface = RecordingSurface::new();
        draw_bar_chart(&mut surface, bounds, &series, &style, &config).expect("bar");
        draw_line_chart(&mut surface, bounds, &series, &style, &config).expect("line");
        draw_scatter_chart(&mut surface, bounds, &series, &style, &config).expect("scatter");
        draw_pie_chart(&mut surface, bounds, &CategoryDistribution::new(), &style).expect("pie");
        prop_assert_eq!(surface.call_count(), 0);
    }

    #[test]
    fn engine_draw_is_repeatable(
        values in prop::collection::vec(-500.0f64..500.0, 0..30),
        width in 50.0f64..1_000.0,
        height in 50.0f64..1_000.0
    ) {
        let data: Vec<DataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, value)| DataPoint::new(i as i64 * 60_000, *value))
            .collect();
        let mut engine = LineChartEngine::new(
            LineChartConfig::builder(data.clone()).show_points(true).build(),
        );
        engine.layout(Bounds::from_size(width, height), &data);

        let mut surface = RecordingSurface::new();
        engine.draw(&mut surface).expect("first draw");
        let first = surface.take();
        engine.draw(&mut surface).expect("second draw");
        prop_assert_eq!(first, surface.take());
    }
}
