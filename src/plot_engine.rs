//! Contract of the external plotting engine each view drives.
//!
//! Series numbering follows the engine convention: index 0 is the x series,
//! data series start at 1 in [`PlotSpec::series`] order.

use crate::config::{AxisOptions, GridStyle, TickStyle};
use crate::data_types::ViewKind;
use crate::registry::SeriesDescriptor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Pixel-space selection rectangle (the overview's visible-window indicator,
/// or a drag selection on a zoomed view).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectRect {
    pub left: f32,
    pub width: f32,
    pub height: Option<f32>,
}

impl SelectRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left,
            width,
            height: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesToggle {
    pub show: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotSize {
    pub width: f32,
    pub height: f32,
}

impl PlotSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    pub options: AxisOptions,
    pub label: String,
    pub grid: GridStyle,
    pub ticks: Option<TickStyle>,
    /// Width reserved for tick labels; y axes only.
    pub label_size: Option<f32>,
}

/// Cursor behaviour requested from the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorSpec {
    pub show: bool,
    /// Drag on the plot creates a selection rectangle.
    pub drag_select: bool,
    /// Cursor position is shared between the zoomed views.
    pub sync: bool,
    /// Opacity applied to unfocused series.
    pub focus_alpha: Option<f32>,
}

/// Everything an engine needs to build one plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSpec {
    pub view: ViewKind,
    pub title: String,
    pub size: PlotSize,
    /// Shared x data (array indexes of the first dataframe).
    pub x: Vec<f64>,
    /// `None` lets the engine auto-range.
    pub x_scale: Option<ScaleRange>,
    pub y_scale: Option<ScaleRange>,
    pub series: Vec<SeriesDescriptor>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub cursor: CursorSpec,
    pub legend: bool,
}

pub trait PlotEngine {
    fn init(&mut self, spec: &PlotSpec);
    fn set_scale(&mut self, axis: Axis, range: ScaleRange);
    fn set_select(&mut self, rect: SelectRect, fire_events: bool);
    fn set_series(&mut self, index: usize, toggle: SeriesToggle);
    fn redraw(&mut self);
    fn set_size(&mut self, size: PlotSize);
}

/// Engine-side cursor report.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    /// Hovered data index, `None` when the pointer left the plot.
    pub idx: Option<usize>,
    pub left: f32,
    pub top: f32,
}

/// Hook points the engine fires; the host forwards them to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlotHook {
    Ready,
    /// Fired before the canvas is cleared for a repaint.
    DrawClear,
    /// Fired after the series were painted; answered with overlays.
    Draw,
    SetSelect(SelectRect),
    SetCursor(CursorState),
    /// Focused series changed (`None` when focus is released).
    SetSeries(Option<usize>),
}
