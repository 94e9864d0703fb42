mod common;

use common::*;
use residue_chart::data_types::{DisplayRule, Glyph, SeriesStyle, ViewIntents, ViewKind};
use residue_chart::plot_engine::{CursorState, PlotHook};
use residue_chart::{ChartCallbacks, ChartConfig, MetricChannel, Overlay};

fn thresholds(overlays: &[Overlay]) -> Vec<f64> {
    overlays
        .iter()
        .filter_map(|o| match o {
            Overlay::ThresholdLine { value, .. } => Some(*value),
            _ => None,
        })
        .collect()
}

fn columns(overlays: &[Overlay], color: &str) -> Vec<(f32, f32)> {
    overlays
        .iter()
        .filter_map(|o| match o {
            Overlay::Column { left, width, color: c } if c == color => Some((*left, *width)),
            _ => None,
        })
        .collect()
}

fn has_tooltip(overlays: &[Overlay]) -> bool {
    overlays.iter().any(|o| matches!(o, Overlay::Tooltip { .. }))
}

fn glyph_xs(overlays: &[Overlay]) -> Vec<(usize, f32)> {
    overlays
        .iter()
        .filter_map(|o| match o {
            Overlay::Glyph { row, x, .. } => Some((*row, *x)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_threshold_line_tracks_value() {
    let mut h = single();
    let drawn = h.chart.handle_hook(ViewKind::Profile, PlotHook::Draw);
    assert_eq!(thresholds(&drawn), vec![0.5]);
    h.chart.set_threshold_value(0.8);
    assert_eq!(thresholds(&h.chart.overlays(ViewKind::Profile)), vec![0.8]);
    assert_eq!(thresholds(&h.chart.overlays(ViewKind::Overview)), vec![0.8]);
    assert!(thresholds(&h.chart.overlays(ViewKind::Sequence)).is_empty());
}

#[test]
fn test_overview_guide_line_is_optional() {
    let config = ChartConfig {
        display_threshold_line_in_ranger: false,
        ..ChartConfig::default()
    };
    let h = harness_with(data(vec![protein("a", 101, 1)]), config, ChartCallbacks::default());
    assert!(thresholds(&h.chart.overlays(ViewKind::Overview)).is_empty());
}

#[test]
fn test_selected_residues_are_highlighted_everywhere() {
    let mut h = single();
    h.chart.on_residue_selected_from_structure(11, true, "a");
    let color = ChartConfig::default().palette.column_highlight_color_selected;
    // overview: 5px per index, index 10
    assert_eq!(columns(&h.chart.overlays(ViewKind::Overview), &color), vec![(47.5, 5.0)]);
    assert_eq!(columns(&h.chart.overlays(ViewKind::Profile), &color).len(), 1);
    assert_eq!(columns(&h.chart.overlays(ViewKind::Sequence), &color).len(), 1);
}

#[test]
fn test_hover_column_follows_cursor() {
    let mut h = single();
    h.chart.set_view(0.0, 100.0);
    let hover = ChartConfig::default().palette.column_highlight_color_hover;
    assert!(columns(&h.chart.overlays(ViewKind::Sequence), &hover).is_empty());

    h.chart.handle_hook(
        ViewKind::Sequence,
        PlotHook::SetCursor(CursorState { idx: Some(4), left: 0.0, top: 0.0 }),
    );
    assert_eq!(columns(&h.chart.overlays(ViewKind::Sequence), &hover), vec![(17.5, 5.0)]);
    assert!(columns(&h.chart.overlays(ViewKind::Overview), &hover).is_empty());
}

#[test]
fn test_sequence_glyphs_follow_display_rules() {
    // agg cycles 0.0, 0.1, ... 0.9; the window shows indexes 0..=14
    let mut h = single();
    let drawn = h.chart.overlays(ViewKind::Sequence);
    let rows: Vec<_> = glyph_xs(&drawn).into_iter().map(|(row, _)| row).collect();
    // 0.6, 0.7, 0.8, 0.9
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|&r| r == 0));

    h.chart.set_threshold_value(0.75);
    assert_eq!(glyph_xs(&h.chart.overlays(ViewKind::Sequence)).len(), 2);

    h.chart.toggle_visibility("a");
    assert!(glyph_xs(&h.chart.overlays(ViewKind::Sequence)).is_empty());
}

#[test]
fn test_equals_rule_and_glyph_shape() {
    let flags = MetricChannel::new(
        "apr",
        (0..20).map(|i| Some(if i % 5 == 0 { 1.0 } else { 0.0 })).collect(),
    )
    .with_intents(ViewIntents {
        sequence: Some(SeriesStyle {
            label: Some("APR".into()),
            display: Some(DisplayRule::Equals(1.0)),
            glyph: Some(Glyph::Rect),
            ..SeriesStyle::default()
        }),
        ..ViewIntents::default()
    });
    let h = harness(data(vec![protein("a", 20, 1).with_channel(flags)]));
    let drawn = h.chart.overlays(ViewKind::Sequence);

    let apr: Vec<_> = drawn
        .iter()
        .filter_map(|o| match o {
            Overlay::Glyph { row: 1, glyph, rows, .. } => Some((*glyph, *rows)),
            _ => None,
        })
        .collect();
    // indexes 0, 5 and 10 inside [0, 14]
    assert_eq!(apr, vec![(Glyph::Rect, 2); 3]);

    let labels: Vec<_> = drawn
        .iter()
        .filter_map(|o| match o {
            Overlay::RowLabel { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["a agg", "a APR"]);
}

#[test]
fn test_tooltip_only_with_legend_as_tooltip() {
    let config = ChartConfig {
        legend_as_tooltip: true,
        ..ChartConfig::default()
    };
    let mut h = harness_with(data(vec![protein("a", 101, 1)]), config, ChartCallbacks::default());
    assert!(!has_tooltip(&h.chart.overlays(ViewKind::Profile)));

    h.chart.handle_hook(
        ViewKind::Profile,
        PlotHook::SetCursor(CursorState { idx: Some(2), left: 30.0, top: 40.0 }),
    );
    let drawn = h.chart.overlays(ViewKind::Profile);
    let tip = drawn
        .iter()
        .find_map(|o| match o {
            Overlay::Tooltip { left, top, lines } => Some((*left, *top, lines.clone())),
            _ => None,
        })
        .unwrap();
    assert_eq!(tip, (30.0, 40.0, vec!["a - L (3); ".to_string(), "a agg: 0.2".to_string()]));

    let plain = single();
    assert!(!has_tooltip(&plain.chart.overlays(ViewKind::Profile)));
}

#[test]
fn test_debug_adds_render_stats() {
    let config = ChartConfig {
        debug: true,
        ..ChartConfig::default()
    };
    let mut h = harness_with(data(vec![protein("a", 101, 1)]), config, ChartCallbacks::default());
    let is_stats = |o: &Overlay| matches!(o, Overlay::Text { text, .. } if text.starts_with("Time to Draw: "));

    for view in ViewKind::ALL {
        assert!(!h.chart.overlays(view).iter().any(is_stats));
        h.chart.handle_hook(view, PlotHook::DrawClear);
        let drawn = h.chart.handle_hook(view, PlotHook::Draw);
        assert!(drawn.iter().any(is_stats));
    }

    let plain = single();
    assert!(!plain.chart.overlays(ViewKind::Profile).iter().any(is_stats));
}
