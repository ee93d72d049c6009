use std::cell::Cell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use healthchart::core::{Bounds, DataPoint, Point};
use healthchart::engine::{ENGINE_POINT_RADIUS_PX, EngineState};
use healthchart::interaction::{GestureEvent, GestureKind, GestureResponse};
use healthchart::render::{Color, DrawCommand, RecordingSurface};
use healthchart::{ChartEngine, LineChartConfig, LineChartEngine};

fn samples() -> Vec<DataPoint> {
    vec![
        DataPoint::new(0, 10.0),
        DataPoint::new(50, 20.0),
        DataPoint::new(100, 30.0),
    ]
}

fn bounds() -> Bounds {
    Bounds::new(10.0, 20.0, 410.0, 220.0)
}

#[test]
fn layout_maps_time_and_value_ranges_onto_bounds() {
    let mut engine = LineChartEngine::new(LineChartConfig::new(samples()));
    engine.layout(bounds(), &samples());

    let geometry = engine.geometry().expect("laid out");
    let xs: Vec<f64> = geometry.points.iter().map(|point| point.x).collect();
    let ys: Vec<f64> = geometry.points.iter().map(|point| point.y).collect();
    assert_eq!(xs, vec![10.0, 210.0, 410.0]);
    assert_eq!(ys, vec![220.0, 120.0, 20.0]);
}

#[test]
fn flat_values_sit_on_the_bottom_edge() {
    let flat = vec![DataPoint::new(0, 5.0), DataPoint::new(10, 5.0)];
    let mut engine = LineChartEngine::new(LineChartConfig::new(flat.clone()));
    engine.layout(bounds(), &flat);

    let geometry = engine.geometry().expect("laid out");
    assert!(geometry.points.iter().all(|point| point.y == 220.0));
    assert!(geometry.points.iter().all(|point| point.is_finite()));
}

#[test]
fn draw_before_layout_is_a_no_op() {
    let engine = LineChartEngine::new(LineChartConfig::new(samples()));
    assert_eq!(engine.state(), EngineState::Unlaid);

    let mut surface = RecordingSurface::new();
    engine.draw(&mut surface).expect("draw");
    assert_eq!(surface.call_count(), 0);
}

#[test]
fn single_sample_draws_no_path() {
    let single = vec![DataPoint::new(0, 1.0)];
    let mut engine = LineChartEngine::new(LineChartConfig::new(single.clone()));
    engine.layout(bounds(), &single);
    assert_eq!(engine.state(), EngineState::Laid);

    let mut surface = RecordingSurface::new();
    engine.draw(&mut surface).expect("draw");
    assert_eq!(surface.path_count(), 0);
    assert_eq!(surface.call_count(), 0);
}

#[test]
fn repeated_draws_replay_identical_commands() {
    let mut engine = LineChartEngine::new(LineChartConfig::new(samples()));
    engine.layout(bounds(), &samples());

    let mut surface = RecordingSurface::new();
    engine.draw(&mut surface).expect("first draw");
    let first = surface.take();
    engine.draw(&mut surface).expect("second draw");
    let second = surface.take();

    assert_eq!(first, second);
    assert_eq!(
        first.iter().filter(|command| matches!(command, DrawCommand::Path(_))).count(),
        1
    );
}

#[test]
fn relayout_replaces_cached_geometry() {
    let mut engine = LineChartEngine::new(LineChartConfig::new(samples()));
    engine.layout(bounds(), &samples());
    engine.layout(Bounds::from_size(100.0, 100.0), &samples());

    let geometry = engine.geometry().expect("laid out");
    assert_eq!(geometry.points[0], Point::new(0.0, 100.0));
    assert_eq!(geometry.points[2], Point::new(100.0, 0.0));
}

#[test]
fn show_points_adds_a_marker_per_sample() {
    let config = LineChartConfig::builder(samples()).show_points(true).build();
    let point_color = Color::rgb(1.0, 0.0, 0.0);
    let mut engine =
        LineChartEngine::new(config).with_colors(Color::rgb(0.0, 0.0, 1.0), point_color);
    engine.layout(bounds(), &samples());

    let mut surface = RecordingSurface::new();
    engine.draw(&mut surface).expect("draw");
    assert_eq!(surface.path_count(), 1);
    assert_eq!(surface.circle_count(), 3);

    for command in &surface.commands {
        if let DrawCommand::Circle(circle) = command {
            assert_eq!(circle.radius, ENGINE_POINT_RADIUS_PX);
            assert_eq!(circle.color, point_color);
        }
    }
}

#[test]
fn axis_captions_are_drawn_when_configured() {
    let config = LineChartConfig::builder(samples())
        .x_axis("Time")
        .y_axis("Heart Rate")
        .build();
    let mut engine = LineChartEngine::new(config);
    engine.layout(bounds(), &samples());

    let mut surface = RecordingSurface::new();
    engine.draw(&mut surface).expect("draw");

    let captions: Vec<(String, f64, f64)> = surface
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text(text) => Some((text.text.clone(), text.x, text.y)),
            _ => None,
        })
        .collect();
    assert_eq!(captions.len(), 2);
    assert_eq!(captions[0].0, "Time");
    assert_abs_diff_eq!(captions[0].1, 210.0, epsilon = 1e-9);
    assert_eq!(captions[1].0, "Heart Rate");
    assert!(captions[1].2 > 20.0);
}

#[test]
fn gesture_hook_decides_the_response() {
    let seen = Rc::new(Cell::new(0_u32));
    let seen_by_hook = Rc::clone(&seen);

    let config = LineChartConfig::builder(samples()).zoomable(true).build();
    let mut engine = LineChartEngine::new(config).with_gesture_hook(Box::new(
        move |event: &GestureEvent, config: &LineChartConfig| {
            seen_by_hook.set(seen_by_hook.get() + 1);
            if event.kind == GestureKind::Zoom && config.enable_zoom() {
                GestureResponse::RelayoutRequested
            } else {
                GestureResponse::Handled
            }
        },
    ));

    let zoom = GestureEvent::zoom(Point::new(200.0, 100.0), 1.5);
    assert_eq!(engine.on_gesture(&zoom), GestureResponse::RelayoutRequested);
    assert_eq!(
        engine.on_gesture(&GestureEvent::tap(Point::new(0.0, 0.0))),
        GestureResponse::Handled
    );
    assert_eq!(seen.get(), 2);
}

#[test]
fn gestures_without_a_hook_are_ignored() {
    let config = LineChartConfig::builder(samples()).zoomable(true).build();
    let mut engine = LineChartEngine::new(config);
    engine.layout(bounds(), &samples());
    let before = engine.geometry().cloned();

    let pan = GestureEvent::pan(Point::new(50.0, 50.0), Point::new(10.0, 0.0));
    assert_eq!(engine.on_gesture(&pan), GestureResponse::Ignored);
    assert_eq!(engine.geometry().cloned(), before);
}
