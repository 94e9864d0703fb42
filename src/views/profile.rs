//! Zoomed multi-protein profile.

use super::axis_labels::{residue_summary, y_label};
use super::{x_axis_spec, y_axis_spec, Capabilities, Capability, DrawContext, Overlay, ViewAdapter};
use crate::config::ChartConfig;
use crate::data_types::{ViewKind, ViewWindow};
use crate::plot_engine::{CursorSpec, PlotEngine, PlotSize, PlotSpec, ScaleRange};
use crate::registry::DataframeRegistry;

pub const HEIGHT: f32 = 400.0;

pub fn capabilities(config: &ChartConfig) -> Capabilities {
    Capabilities::new([
        Capability::ThresholdLine,
        Capability::SelectedColumns,
        Capability::WheelPan,
        Capability::ClickSelect,
        Capability::AreaSelect,
        Capability::NearestValueCursor,
    ])
    .with_if(Capability::HoverColumn, config.column_highlight)
    .with_if(Capability::LegendTooltip, config.legend_as_tooltip)
    .with_if(Capability::RenderStats, config.debug)
}

pub fn spec(
    registry: &DataframeRegistry,
    config: &ChartConfig,
    width: f32,
    window: ViewWindow,
) -> PlotSpec {
    PlotSpec {
        view: ViewKind::Profile,
        title: config.profile_plot_title.clone(),
        size: PlotSize::new(width, HEIGHT),
        x: registry.x_values(),
        x_scale: Some(ScaleRange::new(window.min, window.max)),
        y_scale: Some(ScaleRange::new(0.0, 1.0)),
        series: registry.series_for(ViewKind::Profile),
        x_axis: x_axis_spec(config, "Residue"),
        y_axis: y_axis_spec(config, "Aggregation propensity"),
        cursor: CursorSpec {
            show: true,
            drag_select: true,
            sync: true,
            focus_alpha: Some(0.3),
        },
        legend: !config.legend_as_tooltip,
    }
}

pub fn build(
    engine: Box<dyn PlotEngine>,
    registry: &DataframeRegistry,
    config: &ChartConfig,
    width: f32,
    window: ViewWindow,
) -> ViewAdapter {
    ViewAdapter::new(
        engine,
        spec(registry, config, width, window),
        capabilities(config),
        config.left_offset,
    )
}

/// Index the cursor should report when hovering `hovered`: itself if it has
/// a value, else the closer of the nearest valued neighbours (left on ties).
pub fn nearest_non_null(
    x: &[f64],
    values: &[Option<f64>],
    hovered: usize,
    cursor_x: f64,
) -> Option<usize> {
    if values.get(hovered).copied().flatten().is_some() {
        return Some(hovered);
    }
    let end = hovered.min(values.len());
    let left = (0..end).rev().find(|&i| values[i].is_some());
    let right = (hovered + 1..values.len()).find(|&i| values[i].is_some());

    let left_x = left.and_then(|i| x.get(i)).copied().unwrap_or(f64::NEG_INFINITY);
    let right_x = right.and_then(|i| x.get(i)).copied().unwrap_or(f64::INFINITY);
    if cursor_x - left_x <= right_x - cursor_x {
        left
    } else {
        right
    }
}

/// Legend rendered next to the cursor: the residue summary, then one line
/// per shown series.
pub(crate) fn tooltip(adapter: &ViewAdapter, ctx: &DrawContext<'_>) -> Option<Overlay> {
    let cursor = adapter.cursor();
    let idx = cursor.idx?;
    let mut lines = vec![residue_summary(ctx.registry, idx)];
    for (i, s) in adapter.series().iter().enumerate() {
        if !adapter.is_shown(i + 1) {
            continue;
        }
        let value = s.value_at(idx).map(y_label).unwrap_or_else(|| "-".to_string());
        lines.push(format!("{} {}: {}", s.protein, s.label(), value));
    }
    Some(Overlay::Tooltip {
        left: cursor.left,
        top: cursor.top,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hovered_value_is_kept() {
        let x = [0.0, 1.0, 2.0];
        assert_eq!(nearest_non_null(&x, &[Some(1.0), Some(2.0), None], 1, 1.2), Some(1));
    }

    #[test]
    fn test_snaps_to_closer_neighbour() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let v = [Some(1.0), None, None, None, Some(2.0)];
        assert_eq!(nearest_non_null(&x, &v, 1, 1.0), Some(0));
        assert_eq!(nearest_non_null(&x, &v, 3, 3.0), Some(4));
        // equidistant goes left
        assert_eq!(nearest_non_null(&x, &v, 2, 2.0), Some(0));
    }

    #[test]
    fn test_one_sided_and_empty() {
        let x = [0.0, 1.0, 2.0];
        assert_eq!(nearest_non_null(&x, &[None, None, Some(3.0)], 0, 0.0), Some(2));
        assert_eq!(nearest_non_null(&x, &[None, None, None], 1, 1.0), None);
    }

    #[test]
    fn test_legend_moves_into_tooltip() {
        let cfg = ChartConfig {
            legend_as_tooltip: true,
            column_highlight: false,
            ..ChartConfig::default()
        };
        let caps = capabilities(&cfg);
        assert!(caps.contains(Capability::LegendTooltip));
        assert!(!caps.contains(Capability::HoverColumn));
        assert!(caps.contains(Capability::AreaSelect));
    }
}
