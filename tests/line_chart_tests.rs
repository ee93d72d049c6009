use approx::assert_abs_diff_eq;
use healthchart::charts::{ChartStyle, build_line_chart_frame, draw_line_chart};
use healthchart::core::{Bounds, LayoutConfig, Series, layout_line};
use healthchart::render::{Color, RecordingSurface};

fn weekly_series() -> Series {
    Series::new(
        vec![10.0, 25.0, 15.0, 30.0, 20.0, 35.0, 35.0],
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    )
}

#[test]
fn line_vertices_span_plot_edge_to_edge() {
    let bounds = Bounds::from_size(800.0, 500.0);
    let layout =
        layout_line(bounds, &weekly_series(), &LayoutConfig::default()).expect("renderable");

    assert_eq!(layout.vertices.len(), 7);
    assert_abs_diff_eq!(layout.spacing, 110.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.vertices[0].x, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.vertices[6].x, layout.plot.right(), epsilon = 1e-9);

    // 10 of 35 on a 410px axis whose baseline is y=410.
    assert_abs_diff_eq!(
        layout.vertices[0].y,
        410.0 - 10.0 / 35.0 * 410.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(layout.vertices[5].y, 0.0, epsilon = 1e-9);
}

#[test]
fn single_value_lays_out_finitely_but_draws_nothing() {
    let bounds = Bounds::from_size(800.0, 500.0);
    let series = Series::new(vec![12.0], ["only"]);

    let layout = layout_line(bounds, &series, &LayoutConfig::default()).expect("renderable");
    assert_eq!(layout.vertices.len(), 1);
    assert!(layout.vertices[0].is_finite());
    assert!(!layout.is_drawable());

    let mut surface = RecordingSurface::new();
    draw_line_chart(
        &mut surface,
        bounds,
        &series,
        &ChartStyle::default(),
        &LayoutConfig::default(),
    )
    .expect("draw");
    assert_eq!(surface.call_count(), 0);
}

#[test]
fn line_frame_has_path_markers_and_value_labels() {
    let bounds = Bounds::from_size(800.0, 500.0);
    let style = ChartStyle::default().with_color(Color::rgb(0.2, 0.4, 0.6));
    let frame = build_line_chart_frame(bounds, &weekly_series(), &style, &LayoutConfig::default());
    frame.validate().expect("valid frame");

    let paths = frame.paths();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].points.len(), 7);
    assert_eq!(paths[0].color, style.color);

    let circles = frame.circles();
    assert_eq!(circles.len(), 14, "outer and inner marker per vertex");
    assert_eq!(circles[0].radius, 8.0);
    assert_eq!(circles[1].radius, 4.0);
    assert_eq!(circles[1].color, Color::WHITE);

    let value_labels: Vec<&str> = frame
        .texts()
        .into_iter()
        .filter(|text| text.font_size_px == 24.0)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(value_labels, vec!["10", "25", "15", "30", "20", "35", "35"]);
}

#[test]
fn value_labels_sit_above_their_vertex() {
    let bounds = Bounds::from_size(800.0, 500.0);
    let frame = build_line_chart_frame(
        bounds,
        &weekly_series(),
        &ChartStyle::default(),
        &LayoutConfig::default(),
    );
    let path = frame.paths()[0].clone();
    let labels: Vec<_> = frame
        .texts()
        .into_iter()
        .filter(|text| text.font_size_px == 24.0)
        .cloned()
        .collect();

    for (vertex, label) in path.points.iter().zip(&labels) {
        assert_abs_diff_eq!(label.x, vertex.x, epsilon = 1e-9);
        assert!(label.y < vertex.y);
    }
}

#[test]
fn mismatched_series_draws_nothing() {
    let mut surface = RecordingSurface::new();
    draw_line_chart(
        &mut surface,
        Bounds::from_size(800.0, 500.0),
        &Series::new(vec![1.0, 2.0, 3.0], ["a", "b"]),
        &ChartStyle::default(),
        &LayoutConfig::default(),
    )
    .expect("draw");
    assert_eq!(surface.call_count(), 0);
}

#[test]
fn invalid_style_draws_nothing_instead_of_a_partial_chart() {
    let bounds = Bounds::from_size(800.0, 500.0);
    let config = LayoutConfig::default();

    for style in [
        ChartStyle::default().with_marker_radius(0.0),
        ChartStyle::default().with_marker_radius(f64::NAN),
        ChartStyle::default().with_color(Color::rgba(0.0, 0.0, 0.0, 3.0)),
    ] {
        assert!(style.validate().is_err());

        let mut surface = RecordingSurface::new();
        draw_line_chart(&mut surface, bounds, &weekly_series(), &style, &config)
            .expect("invalid style degrades to an empty chart");
        assert_eq!(surface.call_count(), 0);
        assert!(build_line_chart_frame(bounds, &weekly_series(), &style, &config).is_empty());
    }
}
