use super::*;

fn component(temperature: Vec<f64>, humidity: Vec<f64>, gas_level: Vec<f64>, timestamps: &[&str]) -> Component {
    Component {
        id: "c1".into(),
        name: "Sensor Array".into(),
        description: String::new(),
        product_id: "p1".into(),
        temperature,
        humidity,
        gas_level,
        timestamps: timestamps.iter().map(|s| (*s).to_owned()).collect(),
    }
}

#[test]
fn x_position_spans_padded_width() {
    assert_eq!(x_position(0, 7), CHART_PADDING);
    assert_eq!(x_position(6, 7), CHART_WIDTH - CHART_PADDING);
    assert_eq!(x_position(0, 1), CHART_WIDTH / 2.0);
}

#[test]
fn y_position_is_inverted() {
    assert_eq!(y_position(0.0, 0.0, 10.0), CHART_HEIGHT - CHART_PADDING);
    assert_eq!(y_position(10.0, 0.0, 10.0), CHART_PADDING);
    assert_eq!(y_position(5.0, 0.0, 10.0), CHART_HEIGHT / 2.0);
}

#[test]
fn value_range_skips_non_finite_and_widens_flat() {
    assert_eq!(value_range([3.0, f64::NAN, 1.0, 2.0]), Some((1.0, 3.0)));
    assert_eq!(value_range([5.0, 5.0]), Some((4.0, 6.0)));
    assert_eq!(value_range(std::iter::empty()), None);
}

#[test]
fn plot_shares_one_axis_across_channels() {
    let c = component(
        vec![20.0, 25.0],
        vec![50.0, 50.0],
        vec![400.0, 410.0],
        &["2026-03-01T09:00:00.000Z", "2026-03-01T10:00:00.000Z"],
    );
    let plot = plot(&c);

    assert_eq!(plot.lines.len(), 3);
    assert_eq!(plot.lines[0].channel, TEMPERATURE);
    assert_eq!(plot.lines[2].channel, GAS_LEVEL);
    // Temperature minimum sits on the axis floor, gas maximum on the ceiling.
    assert_eq!(plot.lines[0].points[0], (CHART_PADDING, CHART_HEIGHT - CHART_PADDING));
    assert_eq!(plot.lines[2].points[1], (CHART_WIDTH - CHART_PADDING, CHART_PADDING));

    let labels: Vec<&str> = plot.x_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["09:00", "10:00"]);
    assert_eq!(plot.y_ticks.len(), Y_TICKS);
    assert_eq!(plot.y_ticks[0].label, "20");
    assert_eq!(plot.y_ticks[Y_TICKS - 1].label, "410");
}

#[test]
fn plot_of_empty_history_is_empty() {
    let c = component(Vec::new(), Vec::new(), Vec::new(), &[]);
    assert!(plot(&c).is_empty());
}

#[test]
fn readings_without_timestamps_plot_nothing() {
    let c = component(vec![21.0, 22.0], vec![45.0, 46.0], vec![200.0, 210.0], &[]);
    assert!(c.is_empty());
    let plot = plot(&c);
    assert!(plot.is_empty());
    assert!(plot.lines.is_empty());
    assert!(plot.y_ticks.is_empty());
}

#[test]
fn svg_points_joins_pairs() {
    let line = Line { channel: HUMIDITY, points: vec![(40.0, 280.0), (600.0, 40.0)] };
    assert_eq!(line.svg_points(), "40.0,280.0 600.0,40.0");
}

#[test]
fn time_label_falls_back_to_raw_text() {
    assert_eq!(time_label("2026-03-01T23:45:00.123Z"), "23:45");
    assert_eq!(time_label("yesterday"), "yesterday");
}
