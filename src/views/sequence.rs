//! Zoomed sequence track: one row per series, glyphs where the series'
//! display rule passes.

use super::{x_axis_spec, y_axis_spec, Capabilities, Capability, DrawContext, Overlay, ViewAdapter};
use crate::config::ChartConfig;
use crate::data_types::{ViewKind, ViewWindow};
use crate::plot_engine::{CursorSpec, PlotEngine, PlotSize, PlotSpec, ScaleRange};
use crate::registry::DataframeRegistry;
use std::ops::RangeInclusive;

pub const HEIGHT: f32 = 150.0;

pub fn capabilities(config: &ChartConfig) -> Capabilities {
    Capabilities::new([
        Capability::SelectedColumns,
        Capability::SeriesGlyphs,
        Capability::RowLabels,
        Capability::WheelPan,
        Capability::ClickSelect,
    ])
    .with_if(Capability::HoverColumn, config.column_highlight)
    .with_if(Capability::RenderStats, config.debug)
}

pub fn spec(
    registry: &DataframeRegistry,
    config: &ChartConfig,
    width: f32,
    window: ViewWindow,
) -> PlotSpec {
    let series = registry.series_for(ViewKind::Sequence);
    PlotSpec {
        view: ViewKind::Sequence,
        title: config.sequence_plot_title.clone(),
        size: PlotSize::new(width, HEIGHT),
        x: registry.x_values(),
        x_scale: Some(ScaleRange::new(window.min, window.max)),
        y_scale: Some(ScaleRange::new(0.0, series.len() as f64)),
        series,
        x_axis: x_axis_spec(config, ""),
        y_axis: y_axis_spec(config, ""),
        cursor: CursorSpec {
            show: true,
            drag_select: false,
            sync: true,
            focus_alpha: None,
        },
        legend: false,
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

/// Whole indexes inside `window`, limited to the data.
pub fn visible_indexes(window: ViewWindow, len: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 || window.max < 0.0 {
        return None;
    }
    let lo = window.min.ceil().max(0.0) as usize;
    let hi = (window.max.floor() as usize).min(len - 1);
    (lo <= hi).then_some(lo..=hi)
}

pub(crate) fn glyphs(adapter: &ViewAdapter, ctx: &DrawContext<'_>) -> Vec<Overlay> {
    let Some(range) = visible_indexes(ctx.window, adapter.x_len()) else {
        return Vec::new();
    };
    let threshold = ctx.state.threshold.value();
    let rows = adapter.series().len();
    let cell_width = adapter.scale().step_width();

    let mut out = Vec::new();
    for (row, s) in adapter.series().iter().enumerate() {
        if !adapter.is_shown(row + 1) {
            continue;
        }
        let rule = s.style.display.unwrap_or_default();
        let glyph = s.style.glyph.unwrap_or_default();
        for idx in range.clone() {
            if !rule.passes(s.value_at(idx), threshold) {
                continue;
            }
            out.push(Overlay::Glyph {
                x: adapter.scale().map(idx as f64),
                row,
                rows,
                cell_width,
                glyph,
                fill: s.style.fill.clone(),
                stroke: s.style.stroke.clone(),
            });
        }
    }
    out
}

pub(crate) fn row_labels(adapter: &ViewAdapter) -> Vec<Overlay> {
    let rows = adapter.series().len();
    adapter
        .series()
        .iter()
        .enumerate()
        .map(|(row, s)| Overlay::RowLabel {
            row,
            rows,
            text: format!("{} {}", s.protein, s.label()),
        })
        .collect()
}
