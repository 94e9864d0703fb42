//! `ChartController`: the single owner of one chart's shared state.
//!
//! Every mutation goes through a controller method, and every method leaves
//! all three views on the same window before it returns.

use crate::config::{ChartCallbacks, ChartConfig};
use crate::coordinator::{ViewWindowCoordinator, DEFAULT_SPACER};
use crate::data_types::{ChartData, ChartState, LabelSource, ResidueId, ViewKind, ViewWindow};
use crate::error::Result;
use crate::interaction::{
    CursorStyle, DragHandle, FrameCoalescer, PanOrigin, PointerButton, PointerEvent, Press,
    RangerDrag, WheelPan,
};
use crate::plot_engine::{PlotEngine, PlotHook, SelectRect};
use crate::registry::DataframeRegistry;
use crate::selection::{SelectedResidue, SelectionState};
use crate::threshold::Threshold;
use crate::view_controller::ViewController;
use crate::views::axis_labels::{tick_spacing, x_labels, y_label};
use crate::views::profile::nearest_non_null;
use crate::views::{overview, profile, sequence, Capability, DrawContext, Overlay, ViewAdapter};
use tracing::{debug, info, trace};

/// Host surface a chart is attached to: its width and one engine per view.
pub struct ChartHost {
    pub width: f32,
    pub overview: Box<dyn PlotEngine>,
    pub profile: Box<dyn PlotEngine>,
    pub sequence: Box<dyn PlotEngine>,
}

pub struct ChartController {
    registry: DataframeRegistry,
    config: ChartConfig,
    callbacks: ChartCallbacks,
    state: ChartState,
    coordinator: ViewWindowCoordinator,
    overview: ViewAdapter,
    profile: ViewAdapter,
    sequence: ViewAdapter,
    ranger_drag: RangerDrag,
    ranger_frame: FrameCoalescer<f32>,
    wheel_pan: WheelPan,
    press: Option<Press>,
    /// Whether the last left-button release on a zoomed view was in place.
    clicked: bool,
    width: f32,
}

impl ChartController {
    /// Validates `data` and builds the three views. Nothing is built when
    /// validation fails.
    pub fn create(
        data: ChartData,
        config: ChartConfig,
        callbacks: ChartCallbacks,
        host: ChartHost,
    ) -> Result<Self> {
        let registry = DataframeRegistry::from_data(data)?;
        let first = registry.first();
        let labels = LabelSource::new(first.protein_id(), first.amino_acids().to_vec());
        let coordinator = ViewWindowCoordinator::new(registry.max_index(), config.view_size);
        let window = coordinator.window();

        let overview = overview::build(host.overview, &registry, &config, host.width);
        let profile = profile::build(host.profile, &registry, &config, host.width, window);
        let sequence = sequence::build(host.sequence, &registry, &config, host.width, window);

        info!(
            dataframes = registry.len(),
            max_index = registry.max_index(),
            min = window.min,
            max = window.max,
            "chart created"
        );

        Ok(Self {
            registry,
            config,
            callbacks,
            state: ChartState {
                selection: SelectionState::new(),
                threshold: Threshold::default(),
                labels,
            },
            coordinator,
            overview,
            profile,
            sequence,
            ranger_drag: RangerDrag::default(),
            ranger_frame: FrameCoalescer::default(),
            wheel_pan: WheelPan::default(),
            press: None,
            clicked: false,
            width: host.width,
        })
    }

    // --- accessors ---

    pub fn registry(&self) -> &DataframeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn window(&self) -> ViewWindow {
        self.coordinator.window()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    pub fn threshold(&self) -> f64 {
        self.state.threshold.value()
    }

    pub fn labels(&self) -> &LabelSource {
        &self.state.labels
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn view(&self, kind: ViewKind) -> &ViewAdapter {
        match kind {
            ViewKind::Overview => &self.overview,
            ViewKind::Profile => &self.profile,
            ViewKind::Sequence => &self.sequence,
        }
    }

    fn view_mut(&mut self, kind: ViewKind) -> &mut ViewAdapter {
        match kind {
            ViewKind::Overview => &mut self.overview,
            ViewKind::Profile => &mut self.profile,
            ViewKind::Sequence => &mut self.sequence,
        }
    }

    pub fn cursor_style(&self) -> CursorStyle {
        if self.wheel_pan.is_panning() {
            CursorStyle::Move
        } else {
            CursorStyle::Auto
        }
    }

    /// True while a gesture wants every pointer move and release, wherever
    /// the pointer is.
    pub fn is_capturing_pointer(&self) -> bool {
        self.ranger_drag.is_dragging() || self.wheel_pan.is_panning()
    }

    // --- public operations ---

    /// A structure viewer (de)selected a residue. Selecting toggles the pair;
    /// deselecting removes it. The window then follows the selection.
    pub fn on_residue_selected_from_structure(
        &mut self,
        position: impl Into<ResidueId>,
        selected: bool,
        protein: &str,
    ) -> &mut Self {
        let position = position.into();
        debug!(%position, selected, protein, "residue selected from structure");
        if selected {
            self.state.selection.toggle(protein, &position);
        } else {
            self.state.selection.remove(protein, &position);
        }
        self.pan_to_selection(DEFAULT_SPACER, self.config.view_size);
        self.redraw_all();
        self
    }

    pub fn set_threshold_value(&mut self, value: f64) -> &mut Self {
        debug!(value, "threshold changed");
        self.state.threshold.set(value);
        for view in Threshold::redraw_targets(self.config.display_threshold_line_in_ranger) {
            self.view_mut(view).redraw();
        }
        self
    }

    /// Flips every series of `protein` in both zoomed views.
    pub fn toggle_visibility(&mut self, protein: &str) -> &mut Self {
        let toggled = self.profile.toggle_protein(protein) + self.sequence.toggle_protein(protein);
        debug!(protein, toggled, "visibility toggled");
        self
    }

    /// Shows `protein`'s amino-acid sequence on the shared x axis. Unknown
    /// proteins keep the current labels.
    pub fn display_sequence_as_x_labels(&mut self, protein: &str) -> &mut Self {
        match self.registry.get(protein) {
            Some(df) => {
                debug!(protein, "switching x labels");
                self.state.labels.replace(protein, df.amino_acids().to_vec());
            }
            None => trace!(protein, "no dataframe for label source"),
        }
        self.profile.refresh();
        self.sequence.refresh();
        self
    }

    pub fn clear_selection(&mut self, fire: bool) -> &mut Self {
        self.clear_selection_quiet(fire);
        self.redraw_all();
        self
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.profile.set_y_range(min, max);
        self
    }

    /// Places the shared window directly (value space, clamped).
    pub fn set_view(&mut self, min: f64, max: f64) -> &mut Self {
        let window = self.coordinator.set_window(min, max);
        debug!(min = window.min, max = window.max, "view set");
        self.apply_window(window);
        self
    }

    /// Frames the newest `size` selections. Leaves the window untouched
    /// when none of them resolves.
    pub fn pan_to_selection(&mut self, spacer: usize, size: usize) -> &mut Self {
        if let Some(window) =
            self.coordinator
                .pan_to_selection(&self.state.selection, &self.registry, spacer, size)
        {
            self.apply_window(window);
        }
        self
    }

    pub fn resize(&mut self, width: f32) -> &mut Self {
        self.width = width;
        for view in ViewKind::ALL {
            self.view_mut(view).resize(width);
        }
        self.sync_indicator();
        self
    }

    // --- engine hooks ---

    /// Forwards an engine hook. Only `Draw` produces overlays.
    pub fn handle_hook(&mut self, view: ViewKind, hook: PlotHook) -> Vec<Overlay> {
        match hook {
            PlotHook::Ready => {
                if view == ViewKind::Overview {
                    self.sync_indicator();
                }
            }
            PlotHook::DrawClear => self.view_mut(view).on_draw_clear(),
            PlotHook::Draw => return self.overlays(view),
            PlotHook::SetSelect(rect) => self.on_select(view, rect),
            PlotHook::SetCursor(cursor) => self.view_mut(view).on_cursor(cursor),
            PlotHook::SetSeries(series) => self.view_mut(view).on_focus(series),
        }
        Vec::new()
    }

    pub fn overlays(&self, view: ViewKind) -> Vec<Overlay> {
        let ctx = DrawContext {
            registry: &self.registry,
            state: &self.state,
            config: &self.config,
            window: self.coordinator.window(),
        };
        self.view(view).overlays(&ctx)
    }

    /// Data index the cursor reports for `series` (engine numbering) when
    /// the pointer hovers `hovered` at value `cursor_x`.
    pub fn cursor_data_index(
        &self,
        view: ViewKind,
        series: usize,
        hovered: usize,
        cursor_x: f64,
    ) -> Option<usize> {
        let adapter = self.view(view);
        if !adapter.has(Capability::NearestValueCursor) || series == 0 {
            return Some(hovered);
        }
        let s = adapter.series().get(series - 1)?;
        nearest_non_null(adapter.x(), &s.values, hovered, cursor_x)
    }

    /// Labels for x ticks of `view`.
    pub fn x_axis_labels(&self, view: ViewKind, ticks: &[f64], device_pixel_ratio: f32) -> Vec<String> {
        let adapter = self.view(view);
        if !view.is_zoomed() {
            return ticks.iter().map(|&t| y_label(t)).collect();
        }
        let (lo, hi) = adapter.scale().domain();
        let spacing = tick_spacing(adapter.plot_width(), hi - lo, device_pixel_ratio);
        x_labels(ticks, spacing, self.config.label_break_point, &self.state.labels)
    }

    pub fn y_axis_labels(&self, ticks: &[f64]) -> Vec<String> {
        ticks.iter().map(|&t| y_label(t)).collect()
    }

    // --- pointer input ---

    /// Press on a grip of the overview indicator.
    pub fn ranger_pointer_down(&mut self, handle: DragHandle, x: f32) -> &mut Self {
        self.ranger_drag.begin(handle, x, self.overview.select());
        self.ranger_frame.cancel();
        self
    }

    /// Press over a zoomed view.
    pub fn view_pointer_down(&mut self, view: ViewKind, event: PointerEvent) -> &mut Self {
        let adapter = self.view(view);
        match event.button {
            PointerButton::Middle if adapter.has(Capability::WheelPan) => {
                let origin = PanOrigin {
                    view,
                    pointer_x: event.x,
                    window: self.coordinator.window(),
                    value_per_pixel: ViewController::value_per_pixel(adapter.scale()),
                };
                self.wheel_pan.begin(origin);
            }
            PointerButton::Left if adapter.has(Capability::ClickSelect) => {
                let focused_series = adapter.focused_series();
                self.clicked = false;
                self.press = Some(Press {
                    x: event.x,
                    y: event.y,
                    shift: event.shift,
                    focused_series,
                });
            }
            _ => {}
        }
        self
    }

    /// Pointer motion anywhere. Returns `true` when the host has to request
    /// an animation frame and then call [`Self::on_animation_frame`].
    pub fn pointer_move(&mut self, x: f32) -> bool {
        if self.ranger_drag.is_dragging() {
            return self.ranger_frame.schedule(x);
        }
        if let Some((origin, dx)) = self.wheel_pan.delta(x) {
            let window = self
                .coordinator
                .pan_from(origin.window, dx, origin.value_per_pixel);
            self.apply_window(window);
        }
        false
    }

    /// Applies the newest ranger drag position, if any.
    pub fn on_animation_frame(&mut self) -> &mut Self {
        let Some(x) = self.ranger_frame.take() else {
            return self;
        };
        let max_right = self.overview.scale().map(self.coordinator.max_index() as f64);
        match self.ranger_drag.candidate(x, max_right) {
            Some(rect) => {
                self.overview.set_select(rect, false);
                self.apply_indicator(rect);
            }
            None => trace!(x, "ranger candidate out of bounds"),
        }
        self
    }

    /// Release anywhere. `over` is the view under the pointer, if any.
    pub fn pointer_up(&mut self, over: Option<ViewKind>, event: PointerEvent) -> &mut Self {
        if self.ranger_drag.is_dragging() {
            self.on_animation_frame();
            self.ranger_drag.end();
        }
        self.ranger_frame.cancel();
        self.wheel_pan.end();

        if event.button != PointerButton::Left {
            return self;
        }
        let (Some(view), Some(press)) = (over, self.press) else {
            return self;
        };
        if self.view(view).has(Capability::ClickSelect) && press.is_click(event.x, event.y) {
            self.clicked = true;
            self.click_select(view, event.shift);
        }
        self
    }

    // --- internals ---

    fn redraw_all(&mut self) {
        for view in ViewKind::ALL {
            self.view_mut(view).redraw();
        }
    }

    /// Pushes `window` to the zoomed views and moves the indicator over it.
    fn apply_window(&mut self, window: ViewWindow) {
        self.profile.set_window(window);
        self.sequence.set_window(window);
        self.sync_indicator();
    }

    fn sync_indicator(&mut self) {
        let rect = self.overview.window_rect(self.coordinator.window());
        self.overview.set_select(rect, false);
    }

    /// Adopts the window under an indicator rect the overview already shows.
    /// The indicator is moved only when clamping changed the window.
    fn apply_indicator(&mut self, rect: SelectRect) {
        let proposed = self.overview.rect_window(rect);
        let window = self.coordinator.set_window(proposed.min, proposed.max);
        self.profile.set_window(window);
        self.sequence.set_window(window);
        if window != proposed {
            self.sync_indicator();
        }
    }

    fn on_select(&mut self, view: ViewKind, rect: SelectRect) {
        self.view_mut(view).on_select(rect);
        match view {
            ViewKind::Overview => self.apply_indicator(rect),
            _ if self.view(view).has(Capability::AreaSelect) => self.area_select(view, rect),
            _ => {}
        }
    }

    fn clear_selection_quiet(&mut self, fire: bool) {
        let notes = self.state.selection.clear(fire);
        if !notes.is_empty() {
            self.callbacks.residues_selected(&notes);
        }
    }

    fn toggle_at(&mut self, protein: &str, idx: usize) -> Option<SelectedResidue> {
        let position = self.registry.get(protein)?.position_at(idx)?.clone();
        let selected = self.state.selection.toggle(protein, &position);
        Some(SelectedResidue {
            position,
            selected,
            protein: protein.to_string(),
        })
    }

    /// In-place click: toggles the residue under the cursor for the focused
    /// series' protein.
    fn click_select(&mut self, view: ViewKind, shift: bool) {
        let adapter = self.view(view);
        let Some(idx) = adapter.cursor().idx else {
            return;
        };
        let protein = adapter.protein_of(adapter.focused_series().unwrap_or(1), &self.registry);
        if !shift {
            self.clear_selection_quiet(true);
        }
        let Some(residue) = self.toggle_at(&protein, idx) else {
            trace!(%protein, idx, "no residue under cursor");
            if !shift {
                self.redraw_all();
            }
            return;
        };
        debug!(%protein, idx, selected = residue.selected, "residue clicked");
        self.callbacks.residues_selected(std::slice::from_ref(&residue));
        self.redraw_all();
    }

    fn area_select(&mut self, view: ViewKind, rect: SelectRect) {
        if self.clicked || rect.is_empty() {
            return;
        }
        let adapter = self.view(view);
        let len = adapter.x_len();
        let lo = adapter.scale().pixel_to_index(rect.left, len);
        let hi = adapter.scale().pixel_to_index(rect.left + rect.width, len);
        let (shift, focused) = self
            .press
            .map(|p| (p.shift, p.focused_series))
            .unwrap_or((false, None));
        let protein = adapter.protein_of(focused.unwrap_or(0), &self.registry);

        debug!(lo, hi, %protein, "area selected");
        self.callbacks.area_selected(lo, hi);
        if !shift {
            self.clear_selection_quiet(true);
        }
        let residues: Vec<SelectedResidue> =
            (lo..=hi).filter_map(|idx| self.toggle_at(&protein, idx)).collect();
        self.callbacks.residues_selected(&residues);

        self.redraw_all();
        self.profile.set_select(SelectRect::default(), false);
        self.sequence.set_select(SelectRect::default(), false);
    }
}
