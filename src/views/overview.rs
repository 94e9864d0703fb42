//! Overview ("ranger") strip: the full index range with the draggable
//! visible-window indicator.

use super::{x_axis_spec, y_axis_spec, Capabilities, Capability, ViewAdapter};
use crate::config::ChartConfig;
use crate::data_types::ViewKind;
use crate::plot_engine::{CursorSpec, PlotEngine, PlotSize, PlotSpec};
use crate::registry::DataframeRegistry;

pub const HEIGHT: f32 = 100.0;

pub fn capabilities(config: &ChartConfig) -> Capabilities {
    Capabilities::new([Capability::SelectedColumns])
        .with_if(Capability::ThresholdLine, config.display_threshold_line_in_ranger)
        .with_if(Capability::RenderStats, config.debug)
}

pub fn spec(registry: &DataframeRegistry, config: &ChartConfig, width: f32) -> PlotSpec {
    PlotSpec {
        view: ViewKind::Overview,
        title: config.ranger_title.clone(),
        size: PlotSize::new(width, HEIGHT),
        x: registry.x_values(),
        x_scale: None,
        y_scale: None,
        series: registry.series_for(ViewKind::Overview),
        x_axis: x_axis_spec(config, ""),
        y_axis: y_axis_spec(config, ""),
        cursor: CursorSpec {
            show: true,
            drag_select: true,
            sync: false,
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
) -> ViewAdapter {
    ViewAdapter::new(
        engine,
        spec(registry, config, width),
        capabilities(config),
        config.left_offset,
    )
}
