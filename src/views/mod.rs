//! View adapters: each binds the shared chart state to one plot engine.
//!
//! Optional behaviour is composed per view as a set of [`Capability`]s
//! chosen from the configuration when the view is built.

pub mod axis_labels;
pub mod overview;
pub mod profile;
pub mod sequence;

use crate::config::ChartConfig;
use crate::data_types::{ChartState, Glyph, ViewKind, ViewWindow};
use crate::index_mapper::IndexMapper;
use crate::plot_engine::{
    Axis, AxisSpec, CursorState, PlotEngine, PlotSize, PlotSpec, ScaleRange, SelectRect,
    SeriesToggle,
};
use crate::registry::{DataframeRegistry, SeriesDescriptor};
use crate::scales::IndexScale;
use std::collections::HashSet;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Dashed horizontal line at the threshold value.
    ThresholdLine,
    /// Column highlight under every selected residue.
    SelectedColumns,
    /// Column highlight under the cursor.
    HoverColumn,
    /// Per-row glyphs driven by each series' display rule.
    SeriesGlyphs,
    RowLabels,
    /// Legend rendered as a tooltip following the cursor.
    LegendTooltip,
    /// Render time text.
    RenderStats,
    /// Middle-button drag pans the shared window.
    WheelPan,
    /// Press and release in place toggles the residue under the cursor.
    ClickSelect,
    /// Drag selection toggles every residue in the dragged range.
    AreaSelect,
    /// Hovering a missing value snaps the cursor to the nearest value.
    NearestValueCursor,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Capabilities(HashSet<Capability>);

impl Capabilities {
    pub fn new(caps: impl IntoIterator<Item = Capability>) -> Self {
        Self(caps.into_iter().collect())
    }

    /// Adds `cap` only when `enabled`.
    pub fn with_if(mut self, cap: Capability, enabled: bool) -> Self {
        if enabled {
            self.0.insert(cap);
        }
        self
    }

    pub fn contains(&self, cap: Capability) -> bool {
        self.0.contains(&cap)
    }
}

/// Something the host paints on top of a view after the engine drew it.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    /// Horizontal line at `value` on the y scale, across the plot.
    ThresholdLine {
        value: f64,
        stroke: String,
        dash: Vec<f32>,
    },
    /// Full-height column.
    Column { left: f32, width: f32, color: String },
    Glyph {
        x: f32,
        row: usize,
        rows: usize,
        cell_width: f32,
        glyph: Glyph,
        fill: Option<String>,
        stroke: Option<String>,
    },
    RowLabel { row: usize, rows: usize, text: String },
    Tooltip { left: f32, top: f32, lines: Vec<String> },
    Text { text: String, color: String },
}

pub(crate) fn x_axis_spec(config: &ChartConfig, label: &str) -> AxisSpec {
    AxisSpec {
        options: config.axis.x.clone(),
        label: label.to_string(),
        grid: config.grid.clone(),
        ticks: Some(config.ticks.clone()),
        label_size: None,
    }
}

pub(crate) fn y_axis_spec(config: &ChartConfig, label: &str) -> AxisSpec {
    AxisSpec {
        options: config.axis.y.clone(),
        label: label.to_string(),
        grid: config.grid.clone(),
        ticks: Some(config.ticks.clone()),
        label_size: Some(config.left_offset),
    }
}

/// Borrowed view of everything an adapter reads while drawing.
pub struct DrawContext<'a> {
    pub registry: &'a DataframeRegistry,
    pub state: &'a ChartState,
    pub config: &'a ChartConfig,
    pub window: ViewWindow,
}

pub struct ViewAdapter {
    kind: ViewKind,
    engine: Box<dyn PlotEngine>,
    series: Vec<SeriesDescriptor>,
    shown: Vec<bool>,
    capabilities: Capabilities,
    scale: IndexScale,
    size: PlotSize,
    /// Width reserved left of the plotting area.
    left_offset: f32,
    x: Vec<f64>,
    select: SelectRect,
    cursor: CursorState,
    focused_series: Option<usize>,
    draw_started: Option<Instant>,
}

impl ViewAdapter {
    /// Hands `spec` to the engine and mirrors its x scale locally.
    pub fn new(
        mut engine: Box<dyn PlotEngine>,
        spec: PlotSpec,
        capabilities: Capabilities,
        left_offset: f32,
    ) -> Self {
        engine.init(&spec);
        let x_len = spec.x.len();
        let x = spec.x;
        let domain = spec
            .x_scale
            .map(|r| (r.min, r.max))
            .unwrap_or((0.0, x_len.saturating_sub(1) as f64));
        let plot_width = (spec.size.width - left_offset).max(0.0);
        Self {
            kind: spec.view,
            engine,
            shown: vec![true; spec.series.len()],
            series: spec.series,
            capabilities,
            scale: IndexScale::new_linear(domain, (0.0, plot_width)),
            size: spec.size,
            left_offset,
            x,
            select: SelectRect::default(),
            cursor: CursorState::default(),
            focused_series: None,
            draw_started: None,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn has(&self, cap: Capability) -> bool {
        self.capabilities.contains(cap)
    }

    pub fn series(&self) -> &[SeriesDescriptor] {
        &self.series
    }

    /// `index` in engine numbering (data series start at 1).
    pub fn is_shown(&self, index: usize) -> bool {
        index
            .checked_sub(1)
            .and_then(|i| self.shown.get(i))
            .copied()
            .unwrap_or(false)
    }

    pub fn scale(&self) -> &IndexScale {
        &self.scale
    }

    pub fn size(&self) -> PlotSize {
        self.size
    }

    pub fn plot_width(&self) -> f32 {
        (self.size.width - self.left_offset).max(0.0)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn x_len(&self) -> usize {
        self.x.len()
    }

    pub fn select(&self) -> SelectRect {
        self.select
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn focused_series(&self) -> Option<usize> {
        self.focused_series
    }

    /// Protein of a series in engine numbering; index 0 (the x series)
    /// belongs to the first dataframe.
    pub fn protein_of(&self, index: usize, registry: &DataframeRegistry) -> String {
        index
            .checked_sub(1)
            .and_then(|i| self.series.get(i))
            .map(|s| s.protein.clone())
            .unwrap_or_else(|| registry.first().protein_id().to_string())
    }

    /// Adopts the shared window as this view's x scale.
    pub fn set_window(&mut self, window: ViewWindow) {
        self.scale.update_domain(window.min, window.max);
        self.engine
            .set_scale(Axis::X, ScaleRange::new(window.min, window.max));
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) {
        self.engine.set_scale(Axis::Y, ScaleRange::new(min, max));
    }

    pub fn set_select(&mut self, rect: SelectRect, fire_events: bool) {
        self.select = rect;
        self.engine.set_select(rect, fire_events);
    }

    /// Indicator geometry covering `window` on this view's scale.
    pub fn window_rect(&self, window: ViewWindow) -> SelectRect {
        let left = self.scale.map(window.min);
        SelectRect::new(left, self.scale.map(window.max) - left)
    }

    /// Value-space window covered by a pixel rectangle.
    pub fn rect_window(&self, rect: SelectRect) -> ViewWindow {
        ViewWindow::new(
            self.scale.invert(rect.left),
            self.scale.invert(rect.left + rect.width),
        )
    }

    /// Flips every series of `protein`. Returns how many were toggled.
    pub fn toggle_protein(&mut self, protein: &str) -> usize {
        let mut toggled = 0;
        for (i, s) in self.series.iter().enumerate() {
            if s.protein == protein {
                self.shown[i] = !self.shown[i];
                self.engine.set_series(i + 1, SeriesToggle { show: self.shown[i] });
                toggled += 1;
            }
        }
        toggled
    }

    pub fn redraw(&mut self) {
        self.engine.redraw();
    }

    pub fn resize(&mut self, width: f32) {
        self.size.width = width;
        self.scale.update_range(0.0, self.plot_width());
        self.engine.set_size(self.size);
    }

    /// Re-applies the current size, forcing axis labels to be rebuilt.
    pub fn refresh(&mut self) {
        self.engine.set_size(self.size);
    }

    /// Records a selection the engine already applied.
    pub fn on_select(&mut self, rect: SelectRect) {
        self.select = rect;
    }

    pub fn on_cursor(&mut self, cursor: CursorState) {
        self.cursor = cursor;
    }

    pub fn on_focus(&mut self, series: Option<usize>) {
        self.focused_series = series;
    }

    pub fn on_draw_clear(&mut self) {
        self.draw_started = Some(Instant::now());
    }

    fn column(&self, idx: usize, color: &str) -> Overlay {
        let width = self.scale.step_width();
        Overlay::Column {
            left: self.scale.map(idx as f64) - width / 2.0,
            width,
            color: color.to_string(),
        }
    }

    /// Overlays answering the engine's `draw` hook.
    pub fn overlays(&self, ctx: &DrawContext<'_>) -> Vec<Overlay> {
        let mut out = Vec::new();
        let palette = &ctx.config.palette;

        if self.has(Capability::ThresholdLine) {
            out.push(Overlay::ThresholdLine {
                value: ctx.state.threshold.value(),
                stroke: palette.threshold.stroke.clone(),
                dash: palette.threshold.dash.clone(),
            });
        }

        if self.has(Capability::SelectedColumns) {
            for entry in ctx.state.selection.entries() {
                if let Some(idx) = IndexMapper::resolve(ctx.registry, &entry.protein, &entry.position) {
                    out.push(self.column(idx, &palette.column_highlight_color_selected));
                }
            }
        }

        if self.has(Capability::HoverColumn) {
            if let Some(idx) = self.cursor.idx {
                out.push(self.column(idx, &palette.column_highlight_color_hover));
            }
        }

        if self.has(Capability::SeriesGlyphs) {
            out.extend(sequence::glyphs(self, ctx));
        }

        if self.has(Capability::RowLabels) {
            out.extend(sequence::row_labels(self));
        }

        if self.has(Capability::LegendTooltip) {
            if let Some(tip) = profile::tooltip(self, ctx) {
                out.push(tip);
            }
        }

        if self.has(Capability::RenderStats) {
            if let Some(started) = self.draw_started {
                out.push(Overlay::Text {
                    text: format!("Time to Draw: {}ms", started.elapsed().as_millis()),
                    color: "#333".to_string(),
                });
            }
        }

        out
    }
}
