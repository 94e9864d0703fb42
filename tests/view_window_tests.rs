mod common;

use common::*;
use residue_chart::data_types::{ViewKind, ViewWindow};
use residue_chart::plot_engine::{Axis, PlotHook, PlotSize, ScaleRange, SelectRect};
use residue_chart::{ChartCallbacks, ChartConfig};

#[test]
fn test_initial_window_is_first_view_size_indexes() {
    let h = single();
    assert_eq!(h.chart.window(), ViewWindow::new(0.0, 14.0));

    let short = harness(data(vec![protein("a", 6, 1), protein("b", 40, 1)]));
    assert_eq!(short.chart.window(), ViewWindow::new(0.0, 5.0));
}

#[test]
fn test_ready_places_the_indicator() {
    let mut h = single();
    assert_eq!(h.overview.last_select(), None);
    h.chart.handle_hook(ViewKind::Overview, PlotHook::Ready);
    assert_eq!(h.overview.last_select(), Some(SelectRect::new(0.0, 70.0)));
    assert_eq!(h.chart.view(ViewKind::Overview).select(), SelectRect::new(0.0, 70.0));
}

#[test]
fn test_set_view_clamps_to_data() {
    let mut h = single();
    h.chart.set_view(-3.0, 110.0);
    assert_eq!(h.chart.window(), ViewWindow::new(0.0, 100.0));
    assert_eq!(h.profile.last_scale(Axis::X), Some(ScaleRange::new(0.0, 100.0)));
    assert_eq!(h.sequence.last_scale(Axis::X), Some(ScaleRange::new(0.0, 100.0)));
}

#[test]
fn test_set_view_round_trips_through_resizes() {
    let mut h = single();
    h.chart.set_view(10.0, 30.0);
    let indicator = h.overview.last_select();
    assert_eq!(indicator, Some(SelectRect::new(50.0, 100.0)));

    for width in [800.0, 320.0, 1200.0, WIDTH] {
        h.chart.resize(width);
    }
    assert_eq!(h.chart.window(), ViewWindow::new(10.0, 30.0));
    assert_eq!(h.overview.last_select(), indicator);
    assert_eq!(h.chart.width(), WIDTH);
    assert_eq!(
        h.profile.calls().last(),
        Some(&EngineCall::SetSize(PlotSize::new(WIDTH, 400.0)))
    );
    assert!(h.sequence.calls().contains(&EngineCall::SetSize(PlotSize::new(320.0, 150.0))));
}

#[test]
fn test_overview_selection_drives_zoomed_views() {
    let mut h = single();
    h.chart
        .handle_hook(ViewKind::Overview, PlotHook::SetSelect(SelectRect::new(50.0, 100.0)));
    assert_eq!(h.chart.window(), ViewWindow::new(10.0, 30.0));
    assert_eq!(h.profile.last_scale(Axis::X), Some(ScaleRange::new(10.0, 30.0)));
    assert_eq!(h.sequence.last_scale(Axis::X), Some(ScaleRange::new(10.0, 30.0)));
    // the overview already shows the rect; it is not pushed back
    assert_eq!(h.overview.last_select(), None);
}

#[test]
fn test_threshold_redraws_each_linked_view_once() {
    let mut h = single();
    h.clear_logs();
    h.chart.set_threshold_value(0.8);
    assert_eq!(h.chart.threshold(), 0.8);
    assert_eq!(h.overview.redraws(), 1);
    assert_eq!(h.profile.redraws(), 1);
    assert_eq!(h.sequence.redraws(), 1);
}

#[test]
fn test_threshold_skips_overview_without_guide_line() {
    let config = ChartConfig {
        display_threshold_line_in_ranger: false,
        ..ChartConfig::default()
    };
    let mut h = harness_with(data(vec![protein("a", 101, 1)]), config, ChartCallbacks::default());
    h.clear_logs();
    h.chart.set_threshold_value(-2.0);
    assert_eq!(h.chart.threshold(), -2.0);
    assert_eq!(h.overview.redraws(), 0);
    assert_eq!(h.profile.redraws(), 1);
    assert_eq!(h.sequence.redraws(), 1);
}

#[test]
fn test_y_range_only_touches_profile() {
    let mut h = single();
    h.clear_logs();
    h.chart.set_y_range(-1.0, 2.0);
    assert_eq!(h.profile.last_scale(Axis::Y), Some(ScaleRange::new(-1.0, 2.0)));
    assert!(h.sequence.calls().is_empty());
    assert!(h.overview.calls().is_empty());
}

#[test]
fn test_toggle_visibility_flips_zoomed_series() {
    let mut h = harness(data(vec![protein("a", 50, 1), protein("b", 50, 1)]));
    h.clear_logs();
    h.chart.toggle_visibility("b");
    assert_eq!(h.profile.calls(), vec![EngineCall::SetSeries(2, false)]);
    assert_eq!(h.sequence.calls(), vec![EngineCall::SetSeries(2, false)]);
    assert!(h.overview.calls().is_empty());
    assert!(!h.chart.view(ViewKind::Profile).is_shown(2));
    assert!(h.chart.view(ViewKind::Profile).is_shown(1));

    h.chart.toggle_visibility("b");
    assert!(h.chart.view(ViewKind::Sequence).is_shown(2));
    assert_eq!(h.profile.calls().last(), Some(&EngineCall::SetSeries(2, true)));
}

#[test]
fn test_x_labels_follow_label_source() {
    let mut b = protein("b", 101, 1);
    b.amino_acids = Some((0..101).map(|_| Some("W".to_string())).collect());
    let mut h = harness(data(vec![protein("a", 101, 1), b]));
    assert_eq!(h.chart.labels().protein(), Some("a"));

    let ticks = [0.0, 1.0, 2.0];
    assert_eq!(h.chart.x_axis_labels(ViewKind::Profile, &ticks, 1.0), vec!["M", "K", "L"]);

    h.clear_logs();
    h.chart.display_sequence_as_x_labels("b");
    assert_eq!(h.chart.labels().protein(), Some("b"));
    assert_eq!(h.chart.x_axis_labels(ViewKind::Sequence, &ticks, 1.0), vec!["W", "W", "W"]);
    assert_eq!(h.profile.calls(), vec![EngineCall::SetSize(PlotSize::new(WIDTH, 400.0))]);

    h.chart.display_sequence_as_x_labels("nope");
    assert_eq!(h.chart.labels().protein(), Some("b"));
}

#[test]
fn test_x_labels_hide_when_crowded() {
    let mut h = single();
    h.chart.set_view(0.0, 100.0);
    // 500px over 100 indexes is 5px per tick
    assert_eq!(h.chart.x_axis_labels(ViewKind::Profile, &[0.0, 1.0], 1.0), vec!["", ""]);
    assert_eq!(h.chart.y_axis_labels(&[0.26, 1.0]), vec!["0.3", "1"]);
}
